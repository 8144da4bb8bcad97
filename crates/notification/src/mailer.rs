//! Transport-agnostic email sending

use async_trait::async_trait;
use thiserror::Error;

/// A fully rendered message ready to hand to a provider
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Provider acknowledgment for an accepted message
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Delivery {
    /// Opaque message identifier, passed through as returned
    pub id: Option<String>,
}

#[derive(Error, Debug)]
pub enum SendError {
    #[error("Provider rejected message ({status}): {name}: {message}")]
    Provider {
        status: u16,
        name: String,
        message: String,
    },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid address {address}: {reason}")]
    Address { address: String, reason: String },

    #[error("Failed to build message: {0}")]
    Build(String),
}

/// Sends a single message through a transactional email provider
///
/// Implementations perform exactly one send attempt per call and never retry.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> Result<Delivery, SendError>;
}
