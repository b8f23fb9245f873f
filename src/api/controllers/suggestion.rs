use std::sync::Arc;

use crate::api::dto::suggestion::{SuggestionDTO, SuggestionRequestDTO};
use crate::api::error::ApiResult;
use crate::api::middlewares::auth::Authenticated;
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::services::suggestion::SuggestionService;

use actix_web::{HttpResponse, post, web::Data as State};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(ai_suggestions);
}

#[utoipa::path(
    responses(
        (status = 200, body = SuggestionDTO),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = SuggestionRequestDTO,
    security(("jsonwebtoken" = [])),
    tag = "Suggestion",
)]
#[post("/ai-suggestions")]
pub async fn ai_suggestions(
    _identity: Authenticated,
    payload: Json<SuggestionRequestDTO>,
    suggestion_service: State<Arc<dyn SuggestionService>>,
) -> ApiResult {
    let suggestion = suggestion_service
        .suggest(&payload.into_inner().description)
        .await?;

    Ok(HttpResponse::Ok().json(SuggestionDTO::from(suggestion)))
}
