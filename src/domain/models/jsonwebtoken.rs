use serde::{Deserialize, Serialize};

pub struct AccessToken {
    pub token: String,
    pub expiration: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Claims {
    pub sub: String,
    pub jti: String,
    pub exp: usize,
    pub iat: usize,
}
