use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::delivery::DispatchJob;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("dispatch queue is full")]
    Full,
    #[error("dispatch queue is closed")]
    Closed,
}

#[async_trait]
pub trait DispatchQueue: 'static + Sync + Send {
    async fn enqueue(&self, job: DispatchJob) -> Result<(), QueueError>;
}
