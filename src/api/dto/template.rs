use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::models::template::Template;

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct CreateTemplateDTO {
    #[serde(default)]
    #[schema(examples("Hi {first_name}, our spring sale starts today!"))]
    pub template: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TemplateDTO {
    id: String,
    body: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TemplateCreatedDTO {
    #[schema(examples("Template created successfully."))]
    pub message: String,
    pub template: TemplateDTO,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TemplateSummaryDTO {
    id: String,
    body: String,
}

impl From<Template> for TemplateDTO {
    fn from(template: Template) -> Self {
        TemplateDTO {
            id: template.id,
            body: template.body,
            created_at: template.created_at,
        }
    }
}

impl From<Template> for TemplateSummaryDTO {
    fn from(template: Template) -> Self {
        TemplateSummaryDTO {
            id: template.id,
            body: template.body,
        }
    }
}
