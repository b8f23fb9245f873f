use crate::api::dto::validation::{blank_as_none, is_username};
use crate::domain::models::account::{Account, CreateAccount, Credentials};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDTO {
    id: String,
    username: String,
    email: Option<String>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisteredDTO {
    #[schema(examples("User registered successfully."))]
    pub message: String,
    pub account: AccountDTO,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct CreateAccountDTO {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Username and password are required."),
        custom(function = "is_username")
    )]
    #[schema(examples("your_name"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Username and password are required."))]
    #[schema(examples("stR0ngP4ssw0rd!"))]
    pub password: String,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email must have at most 255 characters")
    )]
    #[schema(examples("your@email.com"))]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CredentialsDTO {
    #[schema(examples("your_name"))]
    pub username: String,

    #[schema(examples("stR0ngP4ssw0rd!"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccessTokenDTO {
    #[schema(examples("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"))]
    pub token: String,
    #[schema(examples(1385903))]
    pub expires_at: i64,
}

impl From<Account> for AccountDTO {
    fn from(val: Account) -> Self {
        AccountDTO {
            id: val.id,
            username: val.username,
            email: val.email,
            created_at: val.created_at,
        }
    }
}

impl From<CreateAccountDTO> for CreateAccount {
    fn from(create_account: CreateAccountDTO) -> Self {
        CreateAccount {
            username: create_account.username,
            email: create_account.email,
            password: create_account.password,
        }
    }
}

impl From<CredentialsDTO> for Credentials {
    fn from(credentials: CredentialsDTO) -> Self {
        Credentials {
            username: credentials.username,
            password: credentials.password,
        }
    }
}
