use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::delivery::{DeliveryReport, DispatchReceipt, SendEmail};

#[async_trait]
pub trait EmailService: 'static + Sync + Send {
    /// Validates recipients, queues the valid ones and logs one delivery
    /// record per address. Returns before anything is sent.
    async fn dispatch(&self, owner: &str, email: SendEmail) -> AppResult<DispatchReceipt>;
    async fn status(&self, owner: &str) -> AppResult<DeliveryReport>;
}
