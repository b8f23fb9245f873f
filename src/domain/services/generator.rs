use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("failed to start generator: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("generator exited with {status}: {stderr}")]
    Exit { status: String, stderr: String },
    #[error("generator timed out after {0}s")]
    Timeout(u64),
}

/// Produces free text for a prompt. Output is passed through verbatim.
#[async_trait]
pub trait TextGenerator: 'static + Sync + Send {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}
