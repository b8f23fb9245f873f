use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Success,
    Fail,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Fail => "fail",
        }
    }
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recipient's outcome for one dispatch call. Never updated once stored.
#[derive(Debug, Clone)]
pub struct DeliveryRecord {
    pub id: String,
    pub owner: String,
    pub recipient: String,
    pub status: DeliveryStatus,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateDeliveryRecord {
    pub owner: String,
    pub recipient: String,
    pub status: DeliveryStatus,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SendEmail {
    pub subject: String,
    pub message: String,
    pub recipients: Vec<String>,
}

/// A batch handed to the background workers. Every recipient already passed
/// the recipient policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchJob {
    pub subject: String,
    pub message: String,
    pub recipients: Vec<String>,
}

/// Addresses split by the recipient policy, each side in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientPartition {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReceipt {
    pub sent_to: Vec<String>,
    pub not_sent_to: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DeliveryReport {
    pub successful: Vec<DeliveryRecord>,
    pub failed: Vec<DeliveryRecord>,
}
