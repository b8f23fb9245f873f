use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::models::delivery::{CreateDeliveryRecord, DeliveryRecord, DeliveryStatus};
use crate::domain::repositories::delivery::DeliveryRepository;
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::databases::surrealdb::Database;
use crate::infrastructure::models::delivery::{SurrealDelivery, SurrealDeliveryCreate};

pub struct DeliveryRepositoryImpl {
    db: Arc<Database>,
}

impl DeliveryRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

const DELIVERY: &str = "delivery";

#[async_trait]
impl DeliveryRepository for DeliveryRepositoryImpl {
    async fn insert(&self, record: CreateDeliveryRecord) -> RepositoryResult<DeliveryRecord> {
        let record: Option<SurrealDelivery> = self
            .db
            .create(DELIVERY)
            .content(SurrealDeliveryCreate::from(record))
            .await?;

        record
            .map(Into::into)
            .ok_or(RepositoryError::NotCreated(DELIVERY))
    }

    async fn find_by_owner(
        &self,
        owner: &str,
        status: Option<DeliveryStatus>,
    ) -> RepositoryResult<Vec<DeliveryRecord>> {
        let query = match status {
            Some(_) => {
                "SELECT * FROM type::table($table) WHERE owner = type::string($owner) AND status = type::string($status) ORDER BY created_at ASC, id ASC"
            }
            None => {
                "SELECT * FROM type::table($table) WHERE owner = type::string($owner) ORDER BY created_at ASC, id ASC"
            }
        };

        let records: Vec<SurrealDelivery> = self
            .db
            .query(query)
            .bind(("table", DELIVERY))
            .bind(("owner", owner.to_owned()))
            .bind(("status", status.map(|status| status.as_str())))
            .await?
            .take(0)?;

        Ok(records.into_iter().map(Into::into).collect())
    }
}
