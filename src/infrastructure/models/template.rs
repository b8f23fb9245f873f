use serde::{Deserialize, Serialize};
use surrealdb::sql::{Datetime, Thing};

use crate::domain::models::template::{CreateTemplate, Template};

#[derive(Debug, Deserialize)]
pub struct SurrealTemplate {
    id: Thing,
    owner: String,
    body: String,
    created_at: Datetime,
}

#[derive(Serialize)]
pub struct SurrealTemplateCreate {
    owner: String,
    body: String,
    created_at: Datetime,
}

impl From<CreateTemplate> for SurrealTemplateCreate {
    fn from(template: CreateTemplate) -> Self {
        SurrealTemplateCreate {
            owner: template.owner,
            body: template.body,
            created_at: Datetime::from(chrono::Utc::now()),
        }
    }
}

impl From<SurrealTemplate> for Template {
    fn from(template: SurrealTemplate) -> Self {
        Template {
            id: template.id.id.to_raw(),
            owner: template.owner,
            body: template.body,
            created_at: template.created_at.0,
        }
    }
}
