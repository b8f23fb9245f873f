use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::middlewares::auth::Authenticated;
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::services::account::AccountService;

use crate::api::dto::account::{AccessTokenDTO, CreateAccountDTO, CredentialsDTO, RegisteredDTO};
use crate::domain::services::jsonwebtoken::JsonWebTokenService;

use actix_web::{
    HttpResponse,
    cookie::time::OffsetDateTime,
    cookie::{Cookie, SameSite},
    http::StatusCode,
    post,
    web::Data as State,
};

use utoipa_actix_web::service_config::ServiceConfig;

const AUTH_COOKIE: &str = "Authorization";

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(register).service(login).service(logout);
}

fn auth_cookie(value: &str) -> Cookie<'_> {
    Cookie::build(AUTH_COOKIE, value)
        .http_only(true)
        .secure(true)
        .path("/api")
        .same_site(SameSite::Strict)
        .finish()
}

#[utoipa::path(
    responses(
        (status = 201, body = RegisteredDTO, description = "Account Created"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 500, body = AppError, example = json!(AppError::example_500())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    request_body = CreateAccountDTO,
    tag = "Account",
)]
#[post("/register")]
pub async fn register(
    payload: Json<CreateAccountDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let account_dto = payload.into_inner();

    let created_account = account_service.register(account_dto.into()).await?;

    Ok(HttpResponse::Created().json(RegisteredDTO {
        message: "User registered successfully.".to_string(),
        account: created_account.into(),
    }))
}

#[utoipa::path(
    responses(
        (status = 200, body = AccessTokenDTO),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 500, body = AppError, example = json!(AppError::example_500())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    request_body = CredentialsDTO,
    tag = "Account"
)]
#[post("/login")]
pub async fn login(
    payload: Json<CredentialsDTO>,
    account_service: State<Arc<dyn AccountService>>,
    jsonwebtoken_service: State<Arc<dyn JsonWebTokenService>>,
) -> ApiResult {
    let credentials_dto = payload.into_inner();

    let account = account_service.login(credentials_dto.into()).await?;

    let access_token = jsonwebtoken_service.generate_token(account.id)?;

    let expires = OffsetDateTime::from_unix_timestamp(access_token.expiration)
        .map_err(|err| AppError::InternalError().trace(&err.to_string()))?;

    let mut cookie = auth_cookie(&access_token.token);
    cookie.set_expires(expires);

    Ok(HttpResponse::Ok().cookie(cookie).json(AccessTokenDTO {
        token: access_token.token,
        expires_at: access_token.expiration,
    }))
}

#[utoipa::path(
    responses(
        (status = 205, description = "Token revoked and cookie cleared"),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Account"
)]
#[post("/logout")]
pub async fn logout(
    identity: Authenticated,
    jsonwebtoken_service: State<Arc<dyn JsonWebTokenService>>,
) -> ApiResult {
    jsonwebtoken_service.revoke_token(&identity.claims);

    let mut cookie = auth_cookie("");
    cookie.make_removal();

    tracing::info!(account = %identity.account_id(), "logged out");

    Ok(HttpResponse::build(StatusCode::RESET_CONTENT)
        .cookie(cookie)
        .finish())
}

#[cfg(test)]
mod tests {

    use actix_web::{
        App,
        dev::ServiceResponse,
        http::StatusCode,
        test::{self, TestRequest},
    };
    use serde::{Deserialize, Serialize};
    use serde_json::{Value, json};
    use utoipa_actix_web::AppExt;

    use super::*;

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    struct Error {
        code: u16,
        message: String,
    }

    async fn register(data: Value) -> ServiceResponse {
        let app =
            test::init_service(App::new().into_utoipa_app().configure(routes).into_app()).await;

        TestRequest::post()
            .uri("/register")
            .set_json(data)
            .send_request(&app)
            .await
    }

    #[actix_web::test]
    async fn test_register_invalid_email_format() {
        let payload = json!({
            "username": "newsletter",
            "email": "not-an-email",
            "password": "stR0ngP4ssw0rd!"
        });

        let res = register(payload).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let err: Error = test::read_body_json(res).await;
        assert_eq!(err.code, 400);
        assert!(err.message.contains("Invalid email format"));
    }

    #[actix_web::test]
    async fn test_register_missing_username() {
        let payload = json!({
            "password": "stR0ngP4ssw0rd!"
        });

        let res = register(payload).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let err: Error = test::read_body_json(res).await;
        assert_eq!(err.code, 400);
        assert!(err.message.contains("Username and password are required."));
    }

    #[actix_web::test]
    async fn test_register_empty_password() {
        let payload = json!({
            "username": "newsletter",
            "password": ""
        });

        let res = register(payload).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let err: Error = test::read_body_json(res).await;
        assert!(err.message.contains("Username and password are required."));
    }

    #[actix_web::test]
    async fn test_register_invalid_username() {
        let payload = json!({
            "username": "news letter",
            "password": "stR0ngP4ssw0rd!"
        });

        let res = register(payload).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let err: Error = test::read_body_json(res).await;
        assert!(err.message.contains("Username may contain only letters"));
    }
}
