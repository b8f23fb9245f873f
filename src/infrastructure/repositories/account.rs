use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::models::account::{Account, CreateAccount};
use crate::domain::repositories::account::{AccountRepository, FindByCol};
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::databases::surrealdb::Database;
use crate::infrastructure::models::account::{SurrealAccount, SurrealAccountCreate, SurrealCount};

pub struct AccountRepositoryImpl {
    db: Arc<Database>,
}

impl AccountRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

const ACCOUNT: &str = "account";

// Embedded engines report a typed error, remote ones only the message text.
fn is_unique_violation(error: &surrealdb::Error) -> bool {
    matches!(
        error,
        surrealdb::Error::Db(surrealdb::error::Db::IndexExists { .. })
    ) || error.to_string().contains("already contains")
}

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn register(&self, new_account: CreateAccount) -> RepositoryResult<Account> {
        let account: Option<SurrealAccount> = self
            .db
            .create(ACCOUNT)
            .content(SurrealAccountCreate::from(new_account))
            .await
            .map_err(|error| {
                if is_unique_violation(&error) {
                    RepositoryError::Duplicate(ACCOUNT)
                } else {
                    RepositoryError::Database(error)
                }
            })?;

        account
            .map(Into::into)
            .ok_or(RepositoryError::NotCreated(ACCOUNT))
    }

    async fn is_account(&self, username: &str) -> RepositoryResult<bool> {
        let mut res = self
            .db
            .query("(SELECT count() FROM type::table($table) WHERE username = type::string($username) GROUP ALL)[0] or { count: 0 }")
            .bind(("table", ACCOUNT))
            .bind(("username", username.to_owned()))
            .await?;

        let counter = res.take::<Option<SurrealCount>>(0)?;

        Ok(counter.is_some_and(|counter| counter.count > 0))
    }

    async fn find_one(&self, column: FindByCol) -> RepositoryResult<Option<Account>> {
        let account: Option<SurrealAccount> = self
            .db
            .query(format!(
                "SELECT * FROM type::table($table) WHERE {column} = type::string($value) LIMIT 1"
            ))
            .bind(("table", ACCOUNT))
            .bind(("value", column.value()))
            .await?
            .take(0)?;

        Ok(account.map(Into::into))
    }
}
