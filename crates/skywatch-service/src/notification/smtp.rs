//! SMTP delivery through lettre.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, info};

use skywatch_core::config::mail::MailConfig;
use skywatch_core::error::{AppError, ErrorKind};
use skywatch_core::result::AppResult;
use skywatch_core::traits::notification::{EmailMessage, NotificationSender};

/// Sends alert e-mails over SMTP.
///
/// Built without a transport when the mail section lacks a host or
/// credentials; every send then fails with a configuration error.
#[derive(Clone)]
pub struct SmtpNotificationSender {
    sender: String,
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
}

impl std::fmt::Debug for SmtpNotificationSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpNotificationSender")
            .field("sender", &self.sender)
            .field("configured", &self.transport.is_some())
            .finish()
    }
}

impl SmtpNotificationSender {
    /// Build the sender from the mail configuration.
    pub fn new(config: &MailConfig) -> AppResult<Self> {
        if !config.is_configured() {
            info!("Mail transport not configured; alert e-mails are disabled");
            return Ok(Self {
                sender: config.sender().to_string(),
                transport: None,
            });
        }

        let builder = if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
        }
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid SMTP host '{}'", config.host),
                e,
            )
        })?;

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .timeout(Some(Duration::from_secs(config.timeout_seconds)))
            .build();

        info!(host = %config.host, port = config.port, "Mail transport configured");
        Ok(Self {
            sender: config.sender().to_string(),
            transport: Some(transport),
        })
    }

    fn build(&self, message: &EmailMessage) -> AppResult<Message> {
        let from: Mailbox = self.sender.parse().map_err(|e| {
            AppError::with_source(ErrorKind::Configuration, "Invalid sender address", e)
        })?;
        let to: Mailbox = message.to.parse().map_err(|e| {
            AppError::with_source(
                ErrorKind::Notification,
                format!("Invalid recipient address '{}'", message.to),
                e,
            )
        })?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(|e| AppError::with_source(ErrorKind::Notification, "Failed to build e-mail", e))
    }
}

#[async_trait]
impl NotificationSender for SmtpNotificationSender {
    fn is_configured(&self) -> bool {
        self.transport.is_some()
    }

    async fn send(&self, message: &EmailMessage) -> AppResult<()> {
        let transport = self
            .transport
            .as_ref()
            .ok_or_else(|| AppError::configuration("Mail transport is not configured"))?;

        let email = self.build(message)?;
        transport.send(email).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Notification,
                format!("Failed to send e-mail to {}", message.to),
                e,
            )
        })?;

        debug!(to = %message.to, subject = %message.subject, "E-mail sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_sender_refuses_to_send() {
        let sender = SmtpNotificationSender::new(&MailConfig::default()).unwrap();
        assert!(!sender.is_configured());

        let err = sender
            .send(&EmailMessage {
                to: "a@example.com".to_string(),
                subject: "s".to_string(),
                body: "b".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[tokio::test]
    async fn configured_sender_builds_plain_text_messages() {
        let config = MailConfig {
            host: "smtp.example.com".to_string(),
            username: "alerts@example.com".to_string(),
            password: "secret".to_string(),
            ..MailConfig::default()
        };
        let sender = SmtpNotificationSender::new(&config).unwrap();
        assert!(sender.is_configured());

        let message = sender
            .build(&EmailMessage {
                to: "bob@example.com".to_string(),
                subject: "Weather Alert for London".to_string(),
                body: "hello".to_string(),
            })
            .unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("From: alerts@example.com"));
        assert!(raw.contains("To: bob@example.com"));
        assert!(raw.contains("Subject: Weather Alert for London"));
    }

    #[tokio::test]
    async fn bad_recipient_is_a_notification_error() {
        let config = MailConfig {
            host: "smtp.example.com".to_string(),
            username: "alerts@example.com".to_string(),
            password: "secret".to_string(),
            ..MailConfig::default()
        };
        let sender = SmtpNotificationSender::new(&config).unwrap();
        let err = sender
            .build(&EmailMessage {
                to: "not an address".to_string(),
                subject: "s".to_string(),
                body: "b".to_string(),
            })
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Notification);
    }
}
