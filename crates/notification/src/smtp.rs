//! SMTP transport using lettre

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;
use ulid::Ulid;

use crate::{Delivery, Mailer, OutboundEmail, SendError};

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

#[derive(Clone)]
pub struct SmtpMailer {
    mailer: SmtpTransport,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, SendError> {
        let mailer = if config.username.is_empty() || config.password.is_empty() {
            tracing::info!(
                smtp_host = %config.host,
                smtp_port = config.port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&config.host)
                .port(config.port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.host,
                smtp_port = config.port,
                "SMTP mailer initialized with authentication and TLS"
            );

            let creds = Credentials::new(config.username.clone(), config.password.clone());

            SmtpTransport::relay(&config.host)
                .map_err(|e| SendError::Transport(e.to_string()))?
                .port(config.port)
                .credentials(creds)
                .build()
        };

        Ok(Self { mailer })
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, SendError> {
    address.parse().map_err(|e: lettre::address::AddressError| {
        SendError::Address {
            address: address.to_string(),
            reason: e.to_string(),
        }
    })
}

/// Builds the MIME message and the `Message-ID` reported back as the delivery id
pub(crate) fn build_message(email: &OutboundEmail) -> Result<(Message, String), SendError> {
    let from = parse_mailbox(&email.from)?;
    let message_id = format!("<{}@{}>", Ulid::new(), from.email.domain());

    let mut builder = Message::builder()
        .from(from)
        .subject(email.subject.as_str())
        .message_id(Some(message_id.clone()));

    for to in &email.to {
        builder = builder.to(parse_mailbox(to)?);
    }

    let message = builder
        .multipart(MultiPart::alternative_plain_html(
            email.text.clone(),
            email.html.clone(),
        ))
        .map_err(|e| SendError::Build(e.to_string()))?;

    Ok((message, message_id))
}

#[async_trait]
impl Mailer for SmtpMailer {
    #[tracing::instrument(skip_all, fields(subject = %email.subject))]
    async fn send(&self, email: OutboundEmail) -> Result<Delivery, SendError> {
        let (message, message_id) = build_message(&email)?;

        tracing::info!("Sending email");

        // SmtpTransport is blocking
        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&message))
            .await
            .map_err(|e| SendError::Transport(e.to_string()))?
            .map_err(|e| SendError::Transport(e.to_string()))?;

        Ok(Delivery {
            id: Some(message_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(from: &str, to: &str) -> OutboundEmail {
        OutboundEmail {
            from: from.to_string(),
            to: vec![to.to_string()],
            subject: "New Agent Infrastructure Inquiry from Ada".to_string(),
            html: "<p>Hello</p>".to_string(),
            text: "Hello".to_string(),
        }
    }

    #[test]
    fn test_build_message_generates_id_on_sender_domain() {
        let (message, id) = build_message(&email(
            "Hickup Intake <onboarding@resend.dev>",
            "ops@example.com",
        ))
        .unwrap();

        assert!(id.starts_with('<'));
        assert!(id.ends_with("@resend.dev>"));

        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains(&id));
        assert!(raw.contains("ops@example.com"));
    }

    #[test]
    fn test_build_message_rejects_invalid_recipient() {
        let result = build_message(&email("onboarding@resend.dev", "not an address"));

        assert!(matches!(
            result,
            Err(SendError::Address { address, .. }) if address == "not an address"
        ));
    }

    #[test]
    fn test_new_without_credentials_is_unauthenticated() {
        let mailer = SmtpMailer::new(&SmtpConfig::default());

        assert!(mailer.is_ok());
    }
}
