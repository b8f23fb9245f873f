use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::config::GeneratorConfig;
use crate::domain::services::generator::{GeneratorError, TextGenerator};

/// Runs a local model CLI once per prompt: `<program> <args..> <prompt>`.
pub struct CommandGenerator {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandGenerator {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }

    /// `ollama run <model> <prompt>` style invocation.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(
            config.program.clone(),
            vec!["run".to_string(), config.model.clone()],
            Duration::from_secs(config.timeout_secs),
        )
    }
}

#[async_trait]
impl TextGenerator for CommandGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(prompt)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, output)
            .await
            .map_err(|_| GeneratorError::Timeout(self.timeout.as_secs()))??;

        if !output.status.success() {
            return Err(GeneratorError::Exit {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
