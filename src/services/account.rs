use std::sync::Arc;

use crate::domain::{
    error::{AppError, AppResult},
    models::account::{Account, CreateAccount, Credentials},
    repositories::account::{AccountRepository, FindByCol},
    repositories::repository::RepositoryError,
    services::account::AccountService,
};

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher, PasswordVerifier, Result, SaltString, rand_core::OsRng,
    },
};

use async_trait::async_trait;

pub static MIN_LENGTH: &str = "Password must be at least 8 characters long.";
pub static MIXED_CASE: &str = "Password must contain both uppercase and lowercase letters.";
pub static DIGIT: &str = "Password must contain at least one numeric digit.";
pub static SPECIAL: &str = "Password must contain at least one special character.";

pub static PASSWORD_GUIDELINES: [&str; 4] = [MIN_LENGTH, MIXED_CASE, DIGIT, SPECIAL];

pub struct AccountServiceImpl {
    repository: Arc<dyn AccountRepository>,
}

impl AccountServiceImpl {
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }

    async fn is_account(&self, username: &str) -> AppResult<bool> {
        Ok(self.repository.is_account(username).await?)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        Ok(self
            .repository
            .find_one(FindByCol::Username(username.to_string()))
            .await?)
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn register(&self, mut new_account: CreateAccount) -> AppResult<Account> {
        if self.is_account(&new_account.username).await? {
            return Err(AppError::BadRequest("User already exists."));
        }

        let weaknesses = password_weaknesses(&new_account.password);

        if !weaknesses.is_empty() {
            return Err(AppError::BadRequest("Password is not strong enough.")
                .errors(weaknesses)
                .guidelines(&PASSWORD_GUIDELINES));
        }

        new_account.password = encrypt_password(&new_account.password)?;

        // a concurrent registration can win between the check above and this insert
        let account = match self.repository.register(new_account).await {
            Err(RepositoryError::Duplicate(_)) => {
                return Err(AppError::BadRequest("User already exists."));
            }
            result => result?,
        };

        tracing::info!(account = %account.id, username = %account.username, "account registered");

        Ok(account)
    }

    async fn login(&self, credentials: Credentials) -> AppResult<Account> {
        let account = match self.find_by_username(&credentials.username).await? {
            Some(account) => account,
            None => return Err(AppError::Unauthorized()),
        };

        verify_password(&credentials.password, &account.password)?;

        if !account.is_active {
            return Err(AppError::Unauthorized());
        }

        Ok(account)
    }
}

/// Every strength rule the password breaks, in guideline order.
pub fn password_weaknesses(password: &str) -> Vec<String> {
    let mut weaknesses = Vec::new();

    if password.chars().count() < 8 {
        weaknesses.push(MIN_LENGTH.to_string());
    }

    if !password.chars().any(char::is_uppercase) || !password.chars().any(char::is_lowercase) {
        weaknesses.push(MIXED_CASE.to_string());
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        weaknesses.push(DIGIT.to_string());
    }

    if !password
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
    {
        weaknesses.push(SPECIAL.to_string());
    }

    weaknesses
}

pub fn encrypt_password(password: &str) -> Result<String> {
    let argon2 = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> Result<()> {
    let argon2 = Argon2::default();
    let hash = PasswordHash::new(hash);

    argon2.verify_password(password.as_bytes(), &hash?)
}
