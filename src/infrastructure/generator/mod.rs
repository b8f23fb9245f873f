pub mod command;

#[cfg(test)]
pub mod mock {
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    use crate::domain::services::generator::{GeneratorError, TextGenerator};

    /// Answers every prompt with the prompt itself, or fails every call.
    pub struct FakeGenerator {
        pub prompts: Mutex<Vec<String>>,
        fail: bool,
    }

    impl FakeGenerator {
        pub fn echo() -> Self {
            FakeGenerator {
                prompts: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        pub fn failing() -> Self {
            FakeGenerator {
                prompts: Mutex::new(Vec::new()),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
            self.prompts.lock().await.push(prompt.to_string());

            if self.fail {
                return Err(GeneratorError::Exit {
                    status: "exit status: 1".to_string(),
                    stderr: "model not found".to_string(),
                });
            }

            Ok(prompt.to_string())
        }
    }
}
