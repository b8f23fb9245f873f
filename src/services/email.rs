use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{
    error::AppResult,
    models::delivery::{
        CreateDeliveryRecord, DeliveryReport, DeliveryStatus, DispatchJob, DispatchReceipt,
        SendEmail,
    },
    repositories::delivery::DeliveryRepository,
    services::{dispatch::DispatchQueue, email::EmailService},
};
use crate::services::recipient::RecipientPolicy;

pub struct EmailServiceImpl {
    policy: RecipientPolicy,
    queue: Arc<dyn DispatchQueue>,
    repository: Arc<dyn DeliveryRepository>,
}

impl EmailServiceImpl {
    pub fn new(
        policy: RecipientPolicy,
        queue: Arc<dyn DispatchQueue>,
        repository: Arc<dyn DeliveryRepository>,
    ) -> Self {
        Self {
            policy,
            queue,
            repository,
        }
    }

    async fn submit(&self, job: DispatchJob) {
        if job.recipients.is_empty() {
            tracing::debug!("no valid recipients, nothing to queue");
            return;
        }

        let recipients = job.recipients.len();

        match self.queue.enqueue(job).await {
            Ok(()) => tracing::info!(recipients, "dispatch queued"),
            Err(error) => tracing::error!(%error, recipients, "failed to queue dispatch"),
        }
    }
}

#[async_trait]
impl EmailService for EmailServiceImpl {
    async fn dispatch(&self, owner: &str, email: SendEmail) -> AppResult<DispatchReceipt> {
        let partition = self.policy.partition(&email.recipients);

        self.submit(DispatchJob {
            subject: email.subject.clone(),
            message: email.message.clone(),
            recipients: partition.valid.clone(),
        })
        .await;

        let created_at = Utc::now();

        let outcomes = partition
            .valid
            .iter()
            .map(|recipient| (recipient, DeliveryStatus::Success))
            .chain(
                partition
                    .invalid
                    .iter()
                    .map(|recipient| (recipient, DeliveryStatus::Fail)),
            );

        // One insert per recipient, no transaction spanning the batch.
        for (recipient, status) in outcomes {
            self.repository
                .insert(CreateDeliveryRecord {
                    owner: owner.to_string(),
                    recipient: recipient.clone(),
                    status,
                    subject: email.subject.clone(),
                    message: email.message.clone(),
                    created_at,
                })
                .await?;
        }

        Ok(DispatchReceipt {
            sent_to: partition.valid,
            not_sent_to: partition.invalid,
        })
    }

    async fn status(&self, owner: &str) -> AppResult<DeliveryReport> {
        let successful = self
            .repository
            .find_by_owner(owner, Some(DeliveryStatus::Success))
            .await?;

        let failed = self
            .repository
            .find_by_owner(owner, Some(DeliveryStatus::Fail))
            .await?;

        Ok(DeliveryReport { successful, failed })
    }
}
