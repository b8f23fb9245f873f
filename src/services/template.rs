use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    error::{AppError, AppResult},
    models::template::{CreateTemplate, FIRST_NAME_PLACEHOLDER, Template},
    repositories::template::TemplateRepository,
    services::template::TemplateService,
};

pub struct TemplateServiceImpl {
    repository: Arc<dyn TemplateRepository>,
}

impl TemplateServiceImpl {
    pub fn new(repository: Arc<dyn TemplateRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl TemplateService for TemplateServiceImpl {
    async fn create(&self, template: CreateTemplate) -> AppResult<Template> {
        if template.body.trim().is_empty() {
            return Err(AppError::BadRequest("Template is required."));
        }

        if !template.body.contains(FIRST_NAME_PLACEHOLDER) {
            return Err(AppError::BadRequest(
                "Template must contain {first_name} placeholder.",
            ));
        }

        Ok(self.repository.create(template).await?)
    }

    async fn list(&self, owner: &str) -> AppResult<Vec<Template>> {
        Ok(self.repository.find_by_owner(owner).await?)
    }
}
