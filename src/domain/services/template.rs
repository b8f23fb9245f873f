use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::template::{CreateTemplate, Template};

#[async_trait]
pub trait TemplateService: 'static + Sync + Send {
    async fn create(&self, template: CreateTemplate) -> AppResult<Template>;
    async fn list(&self, owner: &str) -> AppResult<Vec<Template>>;
}
