use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Error, Debug)]
pub enum MailError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("failed to build message: {0}")]
    Build(String),
    #[error("smtp error: {0}")]
    Smtp(String),
}

#[async_trait]
pub trait Mailer: 'static + Sync + Send {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}
