//! Email dispatch policy
//!
//! In synchronous mode the caller waits for delivery and sees its failure.
//! In deferred mode delivery runs on a detached task after the handler has
//! returned; its outcome only reaches the log.

use crate::email::EmailProviderError;
use std::future::Future;

/// When email delivery happens relative to the HTTP response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchMode {
    /// Deliver before responding; failures become error responses
    #[default]
    Synchronous,
    /// Respond first, deliver on a background task; failures are only logged
    Deferred,
}

impl DispatchMode {
    /// Parse `EMAIL_SEND_MODE`. Unrecognised values fall back to synchronous.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "background" | "deferred" => Self::Deferred,
            _ => Self::Synchronous,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Synchronous => "sync",
            Self::Deferred => "background",
        }
    }
}

/// Run `delivery` according to `mode`.
///
/// `kind` and `submitter` only label the log lines. In deferred mode this
/// always returns `Ok(())`.
pub async fn dispatch<F>(
    mode: DispatchMode,
    kind: &'static str,
    submitter: String,
    delivery: F,
) -> Result<(), EmailProviderError>
where
    F: Future<Output = Result<(), EmailProviderError>> + Send + 'static,
{
    match mode {
        DispatchMode::Synchronous => {
            let result = delivery.await;
            log_outcome(kind, &submitter, &result);
            result
        }
        DispatchMode::Deferred => {
            let watched = submitter.clone();
            let handle = tokio::spawn(async move {
                let result = delivery.await;
                log_outcome(kind, &submitter, &result);
            });
            // A panic inside delivery skips log_outcome; report it here instead.
            tokio::spawn(async move {
                if let Err(e) = handle.await {
                    tracing::error!(
                        kind,
                        submitter = %watched,
                        error = %e,
                        "Deferred email task failed"
                    );
                }
            });
            Ok(())
        }
    }
}

fn log_outcome(kind: &str, submitter: &str, result: &Result<(), EmailProviderError>) {
    match result {
        Ok(()) => tracing::info!(kind, submitter, "Email sent"),
        Err(e) => tracing::error!(kind, submitter, error = %e, "Failed to send email"),
    }
}
