//! Configuration management for the CrickCoach API
//!
//! Everything is read from the environment once at startup. Secrets (SMTP
//! credentials) have no built-in fallback; when they are missing the service
//! still starts, reports the gap on `/api/check-config`, and every send fails
//! with a "not configured" error.

use crate::service::dispatch::DispatchMode;
use anyhow::{Context, Result};
use std::env;

/// Origins allowed when `CORS_ALLOW_ORIGINS` is not set
pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:3001",
    "http://209.38.123.167",
    "http://209.38.123.167:3000",
    "http://crickcoachai.com",
    "http://www.crickcoachai.com",
    "https://crickcoachai.com",
    "https://www.crickcoachai.com",
];

const DEFAULT_DOWNLOAD_FILE_ID: &str = "1rKe4n6eoHsierxhO2TzuphkzxqzvJXY4";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server host
    pub http_host: String,
    /// HTTP server port
    pub http_port: u16,
    /// Origins permitted to call the API from a browser
    pub cors_allow_origins: Vec<String>,
    /// Whether email delivery blocks the response or runs after it
    pub email_send_mode: DispatchMode,
    /// Outbound mail relay settings
    pub mail: MailConfig,
    /// APK download link settings
    pub download: DownloadConfig,
    /// Logging configuration
    pub telemetry: TelemetryConfig,
}

/// SMTP relay and addressing configuration
#[derive(Clone)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from_email: String,
    pub from_name: Option<String>,
    /// Recipient of partnership and contact notifications
    pub admin_email: String,
}

// Hand-written so the password never reaches the logs.
impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("from_email", &self.from_email)
            .field("from_name", &self.from_name)
            .field("admin_email", &self.admin_email)
            .finish()
    }
}

impl MailConfig {
    /// True when host and both credentials are present
    pub fn is_configured(&self) -> bool {
        !self.host.is_empty() && self.username.is_some() && self.password.is_some()
    }

    /// Sender mailbox in `Name <address>` form
    pub fn from_mailbox(&self) -> String {
        match &self.from_name {
            Some(name) => format!("{} <{}>", name, self.from_email),
            None => self.from_email.clone(),
        }
    }
}

/// Shared-file download link configuration
#[derive(Debug, Clone)]
pub struct DownloadConfig {
    /// Identifier of the APK in the file share; `None` when unset
    pub file_id: Option<String>,
}

impl DownloadConfig {
    pub fn is_configured(&self) -> bool {
        self.file_id.is_some()
    }

    /// Browser link that opens the share page
    pub fn share_link(&self) -> Option<String> {
        self.file_id
            .as_deref()
            .map(|id| format!("https://drive.google.com/file/d/{}/view?usp=sharing", id))
    }

    /// Link that starts the download directly
    pub fn direct_link(&self) -> Option<String> {
        self.file_id
            .as_deref()
            .map(|id| format!("https://drive.google.com/uc?export=download&id={}", id))
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// "json" for structured output, anything else for the pretty formatter
    pub log_format: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            http_host: env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            http_port: env::var("HTTP_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("Invalid HTTP_PORT")?,
            cors_allow_origins: parse_origins(env::var("CORS_ALLOW_ORIGINS").ok().as_deref()),
            email_send_mode: env::var("EMAIL_SEND_MODE")
                .map(|s| DispatchMode::parse(&s))
                .unwrap_or_default(),
            mail: MailConfig {
                host: env::var("SMTP_HOST").unwrap_or_else(|_| "mail.smtp2go.com".to_string()),
                port: env::var("SMTP_PORT")
                    .unwrap_or_else(|_| "2525".to_string())
                    .parse()
                    .context("Invalid SMTP_PORT")?,
                username: non_empty_var("SMTP_USERNAME"),
                password: non_empty_var("SMTP_PASSWORD"),
                from_email: env::var("SMTP_FROM_EMAIL")
                    .unwrap_or_else(|_| "noreply@crickcoachai.com".to_string()),
                from_name: match env::var("SMTP_FROM_NAME") {
                    Ok(name) if name.trim().is_empty() => None,
                    Ok(name) => Some(name),
                    Err(_) => Some("CrickCoach AI".to_string()),
                },
                admin_email: env::var("ADMIN_EMAIL")
                    .unwrap_or_else(|_| "admin@crickcoachai.com".to_string()),
            },
            download: DownloadConfig {
                file_id: match env::var("DOWNLOAD_FILE_ID") {
                    Ok(id) if id.trim().is_empty() => None,
                    Ok(id) => Some(id.trim().to_string()),
                    Err(_) => Some(DEFAULT_DOWNLOAD_FILE_ID.to_string()),
                },
            },
            telemetry: TelemetryConfig {
                log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            },
        })
    }

    /// Get HTTP server address
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Split a comma-separated origin list, falling back to the defaults when the
/// override is unset or contains no usable entry.
pub fn parse_origins(raw: Option<&str>) -> Vec<String> {
    let parsed: Vec<String> = raw
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();

    if parsed.is_empty() {
        DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect()
    } else {
        parsed
    }
}
