//! SMTP email provider implementation using lettre

use super::provider::{EmailProvider, EmailProviderError};
use crate::config::MailConfig;
use crate::domain::{EmailAddress, OutboundEmail, TransportMode};
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use std::future::Future;
use std::time::Duration;

/// Upper bound for one complete delivery (connect, handshake, auth, send)
pub const SEND_TIMEOUT: Duration = Duration::from_secs(30);

/// SMTP-based email provider.
///
/// One instance serves one delivery: the connection is opened by `send` and
/// closed when the transport is dropped.
pub struct SmtpEmailProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    mode: TransportMode,
}

impl std::fmt::Debug for SmtpEmailProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpEmailProvider")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl SmtpEmailProvider {
    /// Create a provider for the relay in `config`, secured according to `mode`
    pub fn from_config(config: &MailConfig, mode: TransportMode) -> Result<Self, EmailProviderError> {
        let (username, password) = match (&config.username, &config.password) {
            (Some(username), Some(password)) if !config.host.is_empty() => {
                (username.clone(), password.clone())
            }
            _ => return Err(EmailProviderError::NotConfigured),
        };

        let builder = match mode {
            TransportMode::ImplicitTls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host),
            TransportMode::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            }
        }
        .map_err(|e| EmailProviderError::InvalidConfiguration(e.to_string()))?;

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(username, password))
            .timeout(Some(SEND_TIMEOUT))
            .build();

        Ok(Self { transport, mode })
    }

    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    fn build_message(message: &OutboundEmail) -> Result<Message, EmailProviderError> {
        let mut builder = Message::builder()
            .from(parse_mailbox(&message.from)?)
            .to(parse_mailbox(&message.to)?)
            .subject(&message.subject);

        if let Some(reply_to) = &message.reply_to {
            builder = builder.reply_to(parse_mailbox(reply_to)?);
        }

        builder
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(message.text_body.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(message.html_body.clone()),
                    ),
            )
            .map_err(|e| EmailProviderError::InvalidMessage(e.to_string()))
    }
}

fn parse_mailbox(address: &EmailAddress) -> Result<Mailbox, EmailProviderError> {
    address.to_mailbox_string().parse().map_err(|e| {
        EmailProviderError::InvalidMessage(format!("Invalid address {}: {}", address.email, e))
    })
}

fn classify_smtp_error(err: &lettre::transport::smtp::Error) -> EmailProviderError {
    let code = err.status().map(|c| c.to_string());
    EmailProviderError::classify(code.as_deref(), err.to_string())
}

/// Await one relay exchange, giving up after `limit`
async fn send_within<F, T>(limit: Duration, send: F) -> Result<(), EmailProviderError>
where
    F: Future<Output = Result<T, lettre::transport::smtp::Error>>,
{
    match tokio::time::timeout(limit, send).await {
        Ok(Ok(_response)) => Ok(()),
        Ok(Err(e)) => Err(classify_smtp_error(&e)),
        Err(_) => Err(EmailProviderError::Transport(format!(
            "timed out after {:?}",
            limit
        ))),
    }
}

#[async_trait]
impl EmailProvider for SmtpEmailProvider {
    async fn send(&self, message: &OutboundEmail) -> Result<(), EmailProviderError> {
        let email = Self::build_message(message)?;
        send_within(SEND_TIMEOUT, self.transport.send(email)).await
    }

    fn provider_name(&self) -> &'static str {
        "smtp"
    }
}
