use serde::{Deserialize, Serialize};
use surrealdb::sql::{Datetime, Thing};

use crate::domain::models::delivery::{CreateDeliveryRecord, DeliveryRecord, DeliveryStatus};

#[derive(Debug, Deserialize)]
pub struct SurrealDelivery {
    id: Thing,
    owner: String,
    recipient: String,
    status: DeliveryStatus,
    subject: String,
    message: String,
    created_at: Datetime,
}

#[derive(Serialize)]
pub struct SurrealDeliveryCreate {
    owner: String,
    recipient: String,
    status: DeliveryStatus,
    subject: String,
    message: String,
    created_at: Datetime,
}

impl From<CreateDeliveryRecord> for SurrealDeliveryCreate {
    fn from(record: CreateDeliveryRecord) -> Self {
        SurrealDeliveryCreate {
            owner: record.owner,
            recipient: record.recipient,
            status: record.status,
            subject: record.subject,
            message: record.message,
            created_at: Datetime::from(record.created_at),
        }
    }
}

impl From<SurrealDelivery> for DeliveryRecord {
    fn from(record: SurrealDelivery) -> Self {
        DeliveryRecord {
            id: record.id.id.to_raw(),
            owner: record.owner,
            recipient: record.recipient,
            status: record.status,
            subject: record.subject,
            message: record.message,
            created_at: record.created_at.0,
        }
    }
}
