use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::domain::services::mailer::{MailError, Mailer, OutboundEmail};

/// Plain-text SMTP transport, one message per recipient.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: Arc<AsyncSmtpTransport<Tokio1Executor>>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn from_config(config: &SmtpConfig) -> Result<Self, MailError> {
        let from: Mailbox = config
            .from
            .parse()
            .map_err(|_| MailError::InvalidAddress(config.from.clone()))?;

        let mut builder = match config.tls.as_str() {
            "none" => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host),
            "tls" => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                .map_err(|e| MailError::Smtp(e.to_string()))?,
            _ => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .map_err(|e| MailError::Smtp(e.to_string()))?,
        };

        builder = builder
            .port(config.port)
            .timeout(Some(Duration::from_secs(config.timeout)));

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: Arc::new(builder.build()),
            from,
        })
    }

    fn build_message(&self, email: &OutboundEmail) -> Result<Message, MailError> {
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|_| MailError::InvalidAddress(email.to.clone()))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject.as_str())
            .body(email.body.clone())
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let message = self.build_message(email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(from: &str) -> SmtpConfig {
        SmtpConfig {
            host: "localhost".to_string(),
            port: 2525,
            username: None,
            password: None,
            from: from.to_string(),
            tls: "none".to_string(),
            timeout: 1,
        }
    }

    #[tokio::test]
    async fn test_invalid_sender_is_rejected() {
        assert!(matches!(
            SmtpMailer::from_config(&config("not an address")),
            Err(MailError::InvalidAddress(_))
        ));
    }

    #[tokio::test]
    async fn test_build_message() {
        let mailer = SmtpMailer::from_config(&config("Mailcast <no-reply@mailcast.dev>")).unwrap();

        let message = mailer
            .build_message(&OutboundEmail {
                to: "a@gmail.com".to_string(),
                subject: "Spring sale".to_string(),
                body: "Everything is 20% off".to_string(),
            })
            .unwrap();

        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("To: a@gmail.com"));
        assert!(raw.contains("Subject: Spring sale"));
        assert!(raw.contains("Everything is 20% off"));
    }

    #[tokio::test]
    async fn test_invalid_recipient_is_rejected() {
        let mailer = SmtpMailer::from_config(&config("no-reply@mailcast.dev")).unwrap();

        let result = mailer.build_message(&OutboundEmail {
            to: "nonsense".to_string(),
            subject: "S".to_string(),
            body: "M".to_string(),
        });

        assert!(matches!(result, Err(MailError::InvalidAddress(_))));
    }
}
