//! Email service for delivering messages through the configured relay

use crate::config::MailConfig;
use crate::domain::{OutboundEmail, TransportMode};
use crate::email::{EmailProvider, EmailProviderError, SmtpEmailProvider};
use std::sync::Arc;

/// Factory for building an [`EmailProvider`] for one delivery.
///
/// This indirection keeps tests hermetic: a double can observe the transport
/// mode that was chosen without opening a socket.
#[cfg_attr(test, mockall::automock)]
pub trait EmailProviderFactory: Send + Sync {
    fn create(
        &self,
        config: &MailConfig,
        mode: TransportMode,
    ) -> Result<Box<dyn EmailProvider>, EmailProviderError>;
}

/// Builds real lettre SMTP providers
pub struct SmtpProviderFactory;

impl EmailProviderFactory for SmtpProviderFactory {
    fn create(
        &self,
        config: &MailConfig,
        mode: TransportMode,
    ) -> Result<Box<dyn EmailProvider>, EmailProviderError> {
        Ok(Box::new(SmtpEmailProvider::from_config(config, mode)?))
    }
}

/// Service for sending emails
///
/// Every call opens its own relay connection; nothing is pooled or retried.
pub struct EmailService {
    config: MailConfig,
    provider_factory: Arc<dyn EmailProviderFactory>,
}

impl EmailService {
    pub fn new(config: MailConfig) -> Self {
        Self::with_factory(config, Arc::new(SmtpProviderFactory))
    }

    pub fn with_factory(config: MailConfig, provider_factory: Arc<dyn EmailProviderFactory>) -> Self {
        Self {
            config,
            provider_factory,
        }
    }

    pub fn config(&self) -> &MailConfig {
        &self.config
    }

    /// Transport mode used for the configured relay port
    pub fn transport_mode(&self) -> TransportMode {
        TransportMode::for_port(self.config.port)
    }

    /// Deliver one message, exactly one attempt
    pub async fn send(&self, message: &OutboundEmail) -> Result<(), EmailProviderError> {
        if !self.config.is_configured() {
            return Err(EmailProviderError::NotConfigured);
        }

        let mode = self.transport_mode();
        let provider = self.provider_factory.create(&self.config, mode)?;

        tracing::debug!(
            host = %self.config.host,
            port = self.config.port,
            %mode,
            provider = provider.provider_name(),
            recipient = %message.to.email,
            "Sending email"
        );

        provider.send(message).await.inspect_err(|e| {
            if let EmailProviderError::AuthenticationFailed(_) = e {
                tracing::warn!(
                    host = %self.config.host,
                    port = self.config.port,
                    user = self.config.username.as_deref().unwrap_or_default(),
                    "SMTP relay rejected credentials"
                );
            }
        })
    }
}
