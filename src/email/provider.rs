//! Email provider trait and error types

use crate::domain::OutboundEmail;
use async_trait::async_trait;
use thiserror::Error;

/// Email provider error types
///
/// Every variant is a final failure for the attempt that produced it; nothing
/// in the service retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailProviderError {
    #[error("SMTP is not configured. Set SMTP_HOST, SMTP_USERNAME and SMTP_PASSWORD.")]
    NotConfigured,

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid email message: {0}")]
    InvalidMessage(String),

    #[error("SMTP authentication failed. Check your username and password. Error: {0}")]
    AuthenticationFailed(String),

    #[error("SMTP sender error: {0}")]
    SenderRejected(String),

    #[error("Failed to send email via SMTP relay: {0}")]
    Transport(String),
}

/// Reply codes the relay uses to refuse credentials
const AUTH_FAILURE_CODES: &[&str] = &["530", "534", "535", "538"];

/// Reply codes the relay uses to refuse the envelope sender
const SENDER_REJECTED_CODES: &[&str] = &["553", "555"];

impl EmailProviderError {
    /// Map a relay failure onto the error taxonomy.
    ///
    /// `code` is the three-digit SMTP reply code when the relay answered at all.
    pub fn classify(code: Option<&str>, message: impl Into<String>) -> Self {
        let message = message.into();
        let lowered = message.to_lowercase();

        if code.is_some_and(|c| AUTH_FAILURE_CODES.contains(&c)) || lowered.contains("authentication")
        {
            Self::AuthenticationFailed(message)
        } else if code.is_some_and(|c| SENDER_REJECTED_CODES.contains(&c))
            || lowered.contains("sender")
        {
            Self::SenderRejected(message)
        } else {
            Self::Transport(message)
        }
    }
}

/// Trait for email providers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Deliver one message. One call is one attempt.
    async fn send(&self, message: &OutboundEmail) -> Result<(), EmailProviderError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}
