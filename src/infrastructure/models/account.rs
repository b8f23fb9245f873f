use chrono::Utc;
use serde::{Deserialize, Serialize};
use surrealdb::sql::{Datetime, Thing};

use crate::domain::models::account::{Account, CreateAccount};

#[derive(Debug, Deserialize)]
pub struct SurrealAccount {
    id: Thing,
    username: String,
    email: Option<String>,
    password: String,
    is_active: bool,
    is_staff: bool,
    created_at: Datetime,
}

#[derive(Serialize)]
pub struct SurrealAccountCreate {
    username: String,
    email: Option<String>,
    password: String,
    is_active: bool,
    is_staff: bool,
    created_at: Datetime,
}

impl From<CreateAccount> for SurrealAccountCreate {
    fn from(acc: CreateAccount) -> Self {
        SurrealAccountCreate {
            username: acc.username,
            email: acc.email,
            password: acc.password,
            is_active: true,
            is_staff: false,
            created_at: Datetime::from(Utc::now()),
        }
    }
}

impl From<SurrealAccount> for Account {
    fn from(acc: SurrealAccount) -> Self {
        Account {
            id: acc.id.id.to_raw(),
            username: acc.username,
            email: acc.email,
            password: acc.password,
            is_active: acc.is_active,
            is_staff: acc.is_staff,
            created_at: acc.created_at.0,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SurrealCount {
    pub count: i64,
}
