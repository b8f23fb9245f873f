use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::models::template::{CreateTemplate, Template};
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::domain::repositories::template::TemplateRepository;
use crate::infrastructure::databases::surrealdb::Database;
use crate::infrastructure::models::template::{SurrealTemplate, SurrealTemplateCreate};

pub struct TemplateRepositoryImpl {
    db: Arc<Database>,
}

impl TemplateRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

const TEMPLATE: &str = "template";

#[async_trait]
impl TemplateRepository for TemplateRepositoryImpl {
    async fn create(&self, template: CreateTemplate) -> RepositoryResult<Template> {
        let template: Option<SurrealTemplate> = self
            .db
            .create(TEMPLATE)
            .content(SurrealTemplateCreate::from(template))
            .await?;

        template
            .map(Into::into)
            .ok_or(RepositoryError::NotCreated(TEMPLATE))
    }

    async fn find_by_owner(&self, owner: &str) -> RepositoryResult<Vec<Template>> {
        let templates: Vec<SurrealTemplate> = self
            .db
            .query("SELECT * FROM type::table($table) WHERE owner = type::string($owner) ORDER BY created_at ASC, id ASC")
            .bind(("table", TEMPLATE))
            .bind(("owner", owner.to_owned()))
            .await?
            .take(0)?;

        Ok(templates.into_iter().map(Into::into).collect())
    }
}
