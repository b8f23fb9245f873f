use crate::domain::{
    error::AppResult,
    models::jsonwebtoken::{AccessToken, Claims},
};

pub trait JsonWebTokenService: 'static + Sync + Send {
    fn generate_token(&self, id: String) -> AppResult<AccessToken>;
    fn validate_token(&self, token: &str) -> AppResult<Claims>;
    /// Rejects the token identified by `claims.jti` until it expires.
    fn revoke_token(&self, claims: &Claims);
}
