use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    error::{AppError, AppResult},
    models::suggestion::Suggestion,
    services::{generator::TextGenerator, suggestion::SuggestionService},
};

pub struct SuggestionServiceImpl {
    generator: Arc<dyn TextGenerator>,
}

impl SuggestionServiceImpl {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    async fn generate(&self, prompt: String) -> AppResult<String> {
        self.generator.generate(&prompt).await.map_err(|error| {
            AppError::InternalError().trace(&format!("Error generating content: {error}"))
        })
    }
}

pub fn subject_prompt(description: &str) -> String {
    format!("Generate a one-line email subject within 10 words for: {description}")
}

pub fn body_prompt(description: &str) -> String {
    format!("Do not create subject. Write an email body for: {description}")
}

#[async_trait]
impl SuggestionService for SuggestionServiceImpl {
    async fn suggest(&self, description: &str) -> AppResult<Suggestion> {
        let subject = self.generate(subject_prompt(description)).await?;
        let body = self.generate(body_prompt(description)).await?;

        Ok(Suggestion { subject, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::generator::mock::FakeGenerator;

    #[tokio::test]
    async fn test_suggest_uses_both_prompts() {
        let generator = Arc::new(FakeGenerator::echo());
        let service = SuggestionServiceImpl::new(generator.clone());

        let suggestion = service.suggest("spring sale").await.unwrap();

        assert_eq!(suggestion.subject, subject_prompt("spring sale"));
        assert_eq!(suggestion.body, body_prompt("spring sale"));
        assert_eq!(
            *generator.prompts.lock().await,
            vec![subject_prompt("spring sale"), body_prompt("spring sale")]
        );
    }

    #[tokio::test]
    async fn test_generator_failure_is_internal_error() {
        let service = SuggestionServiceImpl::new(Arc::new(FakeGenerator::failing()));

        let err = service.suggest("spring sale").await.unwrap_err();

        assert_eq!(err.code, 500);
        assert!(err.trace.unwrap().starts_with("Error generating content"));
    }

    #[test]
    fn test_prompt_wording() {
        assert_eq!(
            subject_prompt("spring sale"),
            "Generate a one-line email subject within 10 words for: spring sale"
        );
        assert_eq!(
            body_prompt("spring sale"),
            "Do not create subject. Write an email body for: spring sale"
        );
    }
}
