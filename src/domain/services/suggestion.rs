use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::suggestion::Suggestion;

#[async_trait]
pub trait SuggestionService: 'static + Sync + Send {
    async fn suggest(&self, description: &str) -> AppResult<Suggestion>;
}
