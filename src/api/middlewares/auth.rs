use crate::domain::error::AppError;
use crate::domain::models::jsonwebtoken::Claims;
use crate::domain::services::jsonwebtoken::JsonWebTokenService;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use futures::future::{Ready, err, ok};
use std::sync::Arc;

/// Caller identity resolved from the access token before a protected handler runs.
#[derive(Debug)]
pub struct Authenticated {
    pub claims: Claims,
}

impl Authenticated {
    pub fn account_id(&self) -> &str {
        &self.claims.sub
    }
}

fn get_token(req: &HttpRequest) -> Result<String, AppError> {
    if let Some(cookie) = req.cookie("Authorization") {
        return Ok(cookie.value().to_string());
    }

    if let Some(header) = req.headers().get("Authorization") {
        return Ok(header
            .to_str()
            .map_err(|_| AppError::Unauthorized())?
            .trim_start_matches("Bearer")
            .to_string());
    }

    Err(AppError::Unauthorized())
}

impl FromRequest for Authenticated {
    type Error = AppError;
    type Future = Ready<Result<Authenticated, AppError>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(jsonwebtoken_service) =
            req.app_data::<web::Data<Arc<dyn JsonWebTokenService>>>()
        {
            return match get_token(req) {
                Ok(token) => match jsonwebtoken_service.validate_token(token.trim()) {
                    Ok(claims) => ok(Authenticated { claims }),
                    Err(error) => err(error),
                },
                Err(error) => err(error),
            };
        }

        err(AppError::InternalError().trace("JsonWebTokenService is not defined"))
    }
}
