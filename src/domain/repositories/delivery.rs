use async_trait::async_trait;

use crate::domain::models::delivery::{CreateDeliveryRecord, DeliveryRecord, DeliveryStatus};

use super::repository::RepositoryResult;

/// Append-only log of delivery outcomes.
#[async_trait]
pub trait DeliveryRepository: Send + Sync {
    async fn insert(&self, record: CreateDeliveryRecord) -> RepositoryResult<DeliveryRecord>;

    /// Records owned by `owner`, oldest first, optionally narrowed to one status.
    async fn find_by_owner(
        &self,
        owner: &str,
        status: Option<DeliveryStatus>,
    ) -> RepositoryResult<Vec<DeliveryRecord>>;
}
