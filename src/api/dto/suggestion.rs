use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::models::suggestion::Suggestion;

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct SuggestionRequestDTO {
    #[serde(default)]
    #[validate(length(
        min = 1,
        message = "Description is required for generating suggestions."
    ))]
    #[schema(examples("Announce our spring sale to returning customers"))]
    pub description: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SuggestionDTO {
    pub subject: String,
    pub body: String,
}

impl From<Suggestion> for SuggestionDTO {
    fn from(suggestion: Suggestion) -> Self {
        SuggestionDTO {
            subject: suggestion.subject,
            body: suggestion.body,
        }
    }
}
