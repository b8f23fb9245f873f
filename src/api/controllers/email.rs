use std::sync::Arc;

use crate::api::dto::email::{DispatchAcceptedDTO, EmailStatusDTO, SendEmailDTO};
use crate::api::error::ApiResult;
use crate::api::middlewares::auth::Authenticated;
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::services::email::EmailService;

use actix_web::{HttpResponse, get, post, web::Data as State};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(send_email).service(email_status);
}

/// Accepts a batch for background delivery. `sent_to` lists the addresses that
/// were queued, not ones that have been delivered.
#[utoipa::path(
    responses(
        (status = 200, body = DispatchAcceptedDTO, description = "Dispatch accepted"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = SendEmailDTO,
    security(("jsonwebtoken" = [])),
    tag = "Email",
)]
#[post("/send-email")]
pub async fn send_email(
    identity: Authenticated,
    payload: Json<SendEmailDTO>,
    email_service: State<Arc<dyn EmailService>>,
) -> ApiResult {
    let receipt = email_service
        .dispatch(identity.account_id(), payload.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(DispatchAcceptedDTO::from(receipt)))
}

#[utoipa::path(
    responses(
        (status = 200, body = EmailStatusDTO),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Email",
)]
#[get("/email-status")]
pub async fn email_status(
    identity: Authenticated,
    email_service: State<Arc<dyn EmailService>>,
) -> ApiResult {
    let report = email_service.status(identity.account_id()).await?;

    Ok(HttpResponse::Ok().json(EmailStatusDTO::from(report)))
}
