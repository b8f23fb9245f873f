use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{
    Mutex,
    mpsc::{self, Receiver, Sender, error::TrySendError},
};
use tracing::Instrument;

use crate::config::DispatchConfig;
use crate::domain::models::delivery::DispatchJob;
use crate::domain::services::dispatch::{DispatchQueue, QueueError};
use crate::domain::services::mailer::{Mailer, OutboundEmail};

/// Bounded in-process work queue drained by a fixed pool of tokio tasks.
///
/// Each batch is handled start to finish by one worker, so messages of a batch
/// go out in submission order. Batches may interleave across workers.
pub struct ChannelDispatchQueue {
    sender: Sender<DispatchJob>,
}

impl ChannelDispatchQueue {
    /// Spawns the workers on the current tokio runtime and returns the producer side.
    pub fn start(mailer: Arc<dyn Mailer>, config: &DispatchConfig) -> Self {
        let (sender, receiver) = mpsc::channel(config.capacity.max(1));
        let receiver = Arc::new(Mutex::new(receiver));
        let delay = Duration::from_millis(config.delay_ms);

        for worker in 0..config.workers.max(1) {
            tokio::spawn(run_worker(worker, receiver.clone(), mailer.clone(), delay));
        }

        tracing::info!(
            workers = config.workers.max(1),
            capacity = config.capacity.max(1),
            delay_ms = config.delay_ms,
            "dispatch workers started"
        );

        Self { sender }
    }
}

#[async_trait]
impl DispatchQueue for ChannelDispatchQueue {
    async fn enqueue(&self, job: DispatchJob) -> Result<(), QueueError> {
        self.sender.try_send(job).map_err(|error| match error {
            TrySendError::Full(_) => QueueError::Full,
            TrySendError::Closed(_) => QueueError::Closed,
        })
    }
}

async fn run_worker(
    worker: usize,
    receiver: Arc<Mutex<Receiver<DispatchJob>>>,
    mailer: Arc<dyn Mailer>,
    delay: Duration,
) {
    loop {
        let job = { receiver.lock().await.recv().await };

        let Some(job) = job else {
            break;
        };

        let span = tracing::info_span!("dispatch", worker, recipients = job.recipients.len());

        // Failures are already logged; nobody waits on the outcome.
        let _ = send_batch(mailer.as_ref(), &job, delay)
            .instrument(span)
            .await;
    }

    tracing::debug!(worker, "dispatch worker stopped");
}

/// Sends one message per recipient in order, pausing `delay` after each.
///
/// Stops at the first transport error. Messages already sent stay sent and
/// nothing is retried. Returns the number of messages sent.
pub async fn send_batch(
    mailer: &dyn Mailer,
    job: &DispatchJob,
    delay: Duration,
) -> Result<usize, String> {
    for (sent, recipient) in job.recipients.iter().enumerate() {
        tracing::info!(%recipient, "sending email");

        let email = OutboundEmail {
            to: recipient.clone(),
            subject: job.subject.clone(),
            body: job.message.clone(),
        };

        if let Err(error) = mailer.send(&email).await {
            let failure = format!("Failed to send email: {error}");
            tracing::error!(%recipient, sent, remaining = job.recipients.len() - sent, "{failure}");
            return Err(failure);
        }

        tracing::info!(%recipient, "email sent");

        tracing::debug!(delay_ms = delay.as_millis() as u64, "pausing before next email");
        tokio::time::sleep(delay).await;
    }

    Ok(job.recipients.len())
}
