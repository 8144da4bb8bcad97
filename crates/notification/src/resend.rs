//! Resend HTTP API transport

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{Delivery, Mailer, OutboundEmail, SendError};

#[derive(Debug, Deserialize, Clone)]
pub struct ResendConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ResendConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendResponse {
    id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    name: Option<String>,
    message: Option<String>,
}

/// Mailer backed by the Resend `/emails` endpoint
#[derive(Clone)]
pub struct ResendMailer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ResendMailer {
    pub fn new(config: &ResendConfig) -> Result<Self, SendError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SendError::Transport(e.to_string()))?;

        let endpoint = format!("{}/emails", config.base_url.trim_end_matches('/'));

        tracing::info!(endpoint = %endpoint, "Resend mailer initialized");

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    #[tracing::instrument(skip_all, fields(subject = %email.subject))]
    async fn send(&self, email: OutboundEmail) -> Result<Delivery, SendError> {
        tracing::info!("Sending email");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&SendRequest {
                from: &email.from,
                to: &email.to,
                subject: &email.subject,
                html: &email.html,
                text: &email.text,
            })
            .send()
            .await
            .map_err(|e| SendError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SendError::Transport(e.to_string()))?;

        if status.is_success() {
            let id = match serde_json::from_str::<SendResponse>(&body) {
                Ok(parsed) => parsed.id,
                Err(e) => {
                    tracing::warn!("Unexpected Resend response body: {e}");
                    None
                }
            };

            return Ok(Delivery { id });
        }

        let (name, message) = match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(err) => (
                err.name.unwrap_or_else(|| "unknown_error".to_string()),
                err.message.unwrap_or(body),
            ),
            Err(_) => ("unknown_error".to_string(), body),
        };

        Err(SendError::Provider {
            status: status.as_u16(),
            name,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let mailer = ResendMailer::new(&ResendConfig {
            api_key: "re_test".to_string(),
            base_url: "http://localhost:8080/".to_string(),
            timeout_secs: 1,
        })
        .unwrap();

        assert_eq!(mailer.endpoint, "http://localhost:8080/emails");
    }

    #[test]
    fn test_default_config_targets_resend() {
        let config = ResendConfig::default();

        assert_eq!(config.base_url, "https://api.resend.com");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.api_key.is_empty());
    }
}
