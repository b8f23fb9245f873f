use std::sync::Arc;

use crate::api::dto::template::{
    CreateTemplateDTO, TemplateCreatedDTO, TemplateDTO, TemplateSummaryDTO,
};
use crate::api::error::ApiResult;
use crate::api::middlewares::auth::Authenticated;
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::models::template::CreateTemplate;
use crate::domain::services::template::TemplateService;

use actix_web::{HttpResponse, get, post, web::Data as State};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(create_template).service(list_templates);
}

#[utoipa::path(
    responses(
        (status = 200, body = TemplateCreatedDTO, description = "Template stored"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = CreateTemplateDTO,
    security(("jsonwebtoken" = [])),
    tag = "Template",
)]
#[post("/template")]
pub async fn create_template(
    identity: Authenticated,
    payload: Json<CreateTemplateDTO>,
    template_service: State<Arc<dyn TemplateService>>,
) -> ApiResult {
    let template = template_service
        .create(CreateTemplate {
            owner: identity.account_id().to_string(),
            body: payload.into_inner().template,
        })
        .await?;

    Ok(HttpResponse::Ok().json(TemplateCreatedDTO {
        message: "Template created successfully.".to_string(),
        template: TemplateDTO::from(template),
    }))
}

#[utoipa::path(
    responses(
        (status = 200, body = Vec<TemplateSummaryDTO>),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Template",
)]
#[get("/templates")]
pub async fn list_templates(
    identity: Authenticated,
    template_service: State<Arc<dyn TemplateService>>,
) -> ApiResult {
    let templates = template_service.list(identity.account_id()).await?;

    Ok(HttpResponse::Ok().json(
        templates
            .into_iter()
            .map(TemplateSummaryDTO::from)
            .collect::<Vec<_>>(),
    ))
}
