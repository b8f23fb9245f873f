use async_trait::async_trait;

use crate::domain::models::template::{CreateTemplate, Template};

use super::repository::RepositoryResult;

#[async_trait]
pub trait TemplateRepository: Send + Sync {
    async fn create(&self, template: CreateTemplate) -> RepositoryResult<Template>;
    async fn find_by_owner(&self, owner: &str) -> RepositoryResult<Vec<Template>>;
}
