use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::models::delivery::{DeliveryRecord, DeliveryReport, DispatchReceipt, SendEmail};

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct SendEmailDTO {
    #[serde(default)]
    #[validate(length(min = 1, message = "Subject, message, and recipient list are required."))]
    #[schema(examples("Spring sale"))]
    pub subject: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Subject, message, and recipient list are required."))]
    #[schema(examples("Everything is 20% off this week."))]
    pub message: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Subject, message, and recipient list are required."))]
    #[schema(examples(json!(["jane@gmail.com", "john@yahoo.com"])))]
    pub recipient_list: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DispatchAcceptedDTO {
    #[schema(examples("Email sending started. Emails will be sent asynchronously."))]
    pub message: String,
    pub sent_to: Vec<String>,
    pub not_sent_to: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeliveryDTO {
    recipient: String,
    subject: String,
    message: String,
    sent_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EmailStatusDTO {
    pub success_count: usize,
    pub fail_count: usize,
    pub successful_emails: Vec<DeliveryDTO>,
    pub failed_emails: Vec<DeliveryDTO>,
}

impl From<SendEmailDTO> for SendEmail {
    fn from(dto: SendEmailDTO) -> Self {
        SendEmail {
            subject: dto.subject,
            message: dto.message,
            recipients: dto.recipient_list,
        }
    }
}

impl From<DispatchReceipt> for DispatchAcceptedDTO {
    fn from(receipt: DispatchReceipt) -> Self {
        DispatchAcceptedDTO {
            message: "Email sending started. Emails will be sent asynchronously.".to_string(),
            sent_to: receipt.sent_to,
            not_sent_to: receipt.not_sent_to,
        }
    }
}

impl From<DeliveryRecord> for DeliveryDTO {
    fn from(record: DeliveryRecord) -> Self {
        DeliveryDTO {
            recipient: record.recipient,
            subject: record.subject,
            message: record.message,
            sent_at: record.created_at,
        }
    }
}

impl From<DeliveryReport> for EmailStatusDTO {
    fn from(report: DeliveryReport) -> Self {
        EmailStatusDTO {
            success_count: report.successful.len(),
            fail_count: report.failed.len(),
            successful_emails: report.successful.into_iter().map(Into::into).collect(),
            failed_emails: report.failed.into_iter().map(Into::into).collect(),
        }
    }
}
