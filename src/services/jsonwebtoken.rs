use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::domain::error::{AppError, AppResult};
use crate::domain::models::jsonwebtoken::{AccessToken, Claims};
use crate::domain::services::jsonwebtoken::JsonWebTokenService;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::{Error as JsonWebTokenError, ErrorKind};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

#[derive(Clone)]
pub struct KeyPair {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl KeyPair {
    pub fn from_rsa_pem(
        private_key: Vec<u8>,
        public_key: Vec<u8>,
    ) -> Result<Self, JsonWebTokenError> {
        Ok(KeyPair {
            encoding: EncodingKey::from_rsa_pem(&private_key)?,
            decoding: DecodingKey::from_rsa_pem(&public_key)?,
        })
    }
}

pub struct JsonWebTokenServiceImpl {
    keys: KeyPair,
    lifetime: Duration,
    // jti -> exp
    revoked: RwLock<HashMap<String, usize>>,
}

impl JsonWebTokenServiceImpl {
    pub fn new(keys: KeyPair, lifetime_minutes: i64) -> Self {
        JsonWebTokenServiceImpl {
            keys,
            lifetime: Duration::minutes(lifetime_minutes),
            revoked: RwLock::new(HashMap::new()),
        }
    }

    // The map stays consistent across a panic: every write is a single insert or retain.
    fn is_revoked(&self, jti: &str) -> bool {
        self.revoked
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(jti)
    }
}

impl JsonWebTokenService for JsonWebTokenServiceImpl {
    fn generate_token(&self, id: String) -> AppResult<AccessToken> {
        let now = Utc::now();

        let expiration = now
            .checked_add_signed(self.lifetime)
            .ok_or_else(|| AppError::InternalError().trace("token expiration overflow"))?
            .timestamp();

        let iat = now.timestamp();

        let claims = Claims {
            sub: id,
            jti: Uuid::new_v4().to_string(),
            exp: expiration as usize,
            iat: iat as usize,
        };

        let header = Header::new(Algorithm::RS256);

        let token = encode(&header, &claims, &self.keys.encoding)
            .map_err(|err| AppError::InternalError().trace(&err.to_string()))?;

        Ok(AccessToken { token, expiration })
    }

    fn validate_token(&self, token: &str) -> AppResult<Claims> {
        let claims = match decode::<Claims>(
            token,
            &self.keys.decoding,
            &Validation::new(Algorithm::RS256),
        ) {
            Ok(token) => token.claims,
            Err(error) => {
                return match error.kind() {
                    ErrorKind::ExpiredSignature
                    | ErrorKind::InvalidToken
                    | ErrorKind::InvalidSignature
                    | ErrorKind::InvalidIssuer => Err(AppError::Unauthorized()),
                    _ => Err(AppError::InternalError().trace(&format!("{error:?}"))),
                };
            }
        };

        if self.is_revoked(&claims.jti) {
            return Err(AppError::Unauthorized());
        }

        Ok(claims)
    }

    fn revoke_token(&self, claims: &Claims) {
        let now = Utc::now().timestamp() as usize;

        let mut revoked = self
            .revoked
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        // expired tokens fail signature validation anyway
        revoked.retain(|_, exp| *exp > now);
        revoked.insert(claims.jti.clone(), claims.exp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::crypto::{generate_keypair, generate_pem_pair};

    use rstest::*;

    #[fixture]
    #[once]
    fn jwt_service() -> JsonWebTokenServiceImpl {
        JsonWebTokenServiceImpl::new(generate_keypair(), 60)
    }

    #[fixture]
    fn access_token(jwt_service: &JsonWebTokenServiceImpl) -> AccessToken {
        jwt_service.generate_token("test_id".to_string()).unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn test_token_expiration(access_token: AccessToken) {
        assert!(access_token.expiration - Utc::now().timestamp() <= 60 * 60);
    }

    #[rstest]
    #[tokio::test]
    async fn test_token_validation(
        jwt_service: &JsonWebTokenServiceImpl,
        access_token: AccessToken,
    ) {
        let claims = jwt_service.validate_token(&access_token.token).unwrap();
        assert_eq!(claims.sub, "test_id");
        assert!(!claims.jti.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn test_invalid_token(jwt_service: &JsonWebTokenServiceImpl) {
        assert_eq!(
            jwt_service.validate_token("invalidtoken").unwrap_err(),
            AppError::Unauthorized()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_revoked_token(jwt_service: &JsonWebTokenServiceImpl) {
        let revoked = jwt_service.generate_token("revoked".to_string()).unwrap();
        let other = jwt_service.generate_token("revoked".to_string()).unwrap();

        let claims = jwt_service.validate_token(&revoked.token).unwrap();
        jwt_service.revoke_token(&claims);

        assert_eq!(
            jwt_service.validate_token(&revoked.token).unwrap_err(),
            AppError::Unauthorized()
        );
        assert!(jwt_service.validate_token(&other.token).is_ok());
    }

    #[rstest]
    #[tokio::test]
    async fn test_token_from_other_key_is_rejected(jwt_service: &JsonWebTokenServiceImpl) {
        let foreign = JsonWebTokenServiceImpl::new(generate_keypair(), 60);

        let token = foreign.generate_token("intruder".to_string()).unwrap();

        assert_eq!(
            jwt_service.validate_token(&token.token).unwrap_err(),
            AppError::Unauthorized()
        );
    }

    #[test]
    fn test_key_pair_rejects_swapped_pems() {
        let (private_key, public_key) = generate_pem_pair();

        assert!(KeyPair::from_rsa_pem(public_key, private_key).is_err());
    }

    #[test]
    fn test_revocation_survives_poisoned_lock() {
        let jwt_service = JsonWebTokenServiceImpl::new(generate_keypair(), 60);

        let _ = std::thread::scope(|scope| {
            scope
                .spawn(|| {
                    let _guard = jwt_service.revoked.write().unwrap();
                    panic!("writer died holding the revocation lock");
                })
                .join()
        });
        assert!(jwt_service.revoked.is_poisoned());

        let kept = jwt_service.generate_token("kept".to_string()).unwrap();
        let dropped = jwt_service.generate_token("dropped".to_string()).unwrap();

        assert!(jwt_service.validate_token(&kept.token).is_ok());

        let claims = jwt_service.validate_token(&dropped.token).unwrap();
        jwt_service.revoke_token(&claims);

        assert_eq!(
            jwt_service.validate_token(&dropped.token).unwrap_err(),
            AppError::Unauthorized()
        );
        assert!(jwt_service.validate_token(&kept.token).is_ok());
    }
}
