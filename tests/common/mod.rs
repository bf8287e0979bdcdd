//! Shared helpers for the HTTP integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use crickcoach_api::config::{Config, DownloadConfig, MailConfig, TelemetryConfig};
use crickcoach_api::domain::{OutboundEmail, TransportMode};
use crickcoach_api::email::{EmailProvider, EmailProviderError};
use crickcoach_api::server::{build_router, AppState};
use crickcoach_api::service::{DispatchMode, EmailProviderFactory};
use serde::{de::DeserializeOwned, Serialize};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

pub const TEST_FILE_ID: &str = "1rKe4n6eoHsierxhO2TzuphkzxqzvJXY4";

pub fn test_config(mode: DispatchMode, smtp_port: u16) -> Config {
    Config {
        http_host: "127.0.0.1".to_string(),
        http_port: 0,
        cors_allow_origins: vec!["http://localhost:3000".to_string()],
        email_send_mode: mode,
        mail: MailConfig {
            host: "smtp.test.local".to_string(),
            port: smtp_port,
            username: Some("relay-user".to_string()),
            password: Some("relay-pass".to_string()),
            from_email: "noreply@crickcoachai.com".to_string(),
            from_name: Some("CrickCoach AI".to_string()),
            admin_email: "admin@crickcoachai.com".to_string(),
        },
        download: DownloadConfig {
            file_id: Some(TEST_FILE_ID.to_string()),
        },
        telemetry: TelemetryConfig::default(),
    }
}

/// Provider factory double that records every delivery instead of opening a socket
#[derive(Default)]
pub struct RecordingProviderFactory {
    modes: Mutex<Vec<TransportMode>>,
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
    failure: Option<EmailProviderError>,
}

impl RecordingProviderFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Every send fails with `error` (after being recorded)
    pub fn failing(error: EmailProviderError) -> Arc<Self> {
        Arc::new(Self {
            failure: Some(error),
            ..Self::default()
        })
    }

    pub fn modes(&self) -> Vec<TransportMode> {
        self.modes.lock().unwrap().clone()
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.modes.lock().unwrap().len()
    }
}

impl EmailProviderFactory for RecordingProviderFactory {
    fn create(
        &self,
        _config: &MailConfig,
        mode: TransportMode,
    ) -> Result<Box<dyn EmailProvider>, EmailProviderError> {
        self.modes.lock().unwrap().push(mode);
        Ok(Box::new(RecordingProvider {
            sent: self.sent.clone(),
            failure: self.failure.clone(),
        }))
    }
}

struct RecordingProvider {
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
    failure: Option<EmailProviderError>,
}

#[async_trait]
impl EmailProvider for RecordingProvider {
    async fn send(&self, message: &OutboundEmail) -> Result<(), EmailProviderError> {
        self.sent.lock().unwrap().push(message.clone());
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "recording"
    }
}

/// Production router wired to `factory`
pub fn build_test_router(config: Config, factory: Arc<RecordingProviderFactory>) -> Router {
    build_router(AppState::with_factory(Arc::new(config), factory))
}

/// Make a GET request and parse JSON response
pub async fn get_json<T: DeserializeOwned>(app: &Router, path: &str) -> (StatusCode, Option<T>) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Make a POST request with JSON body and parse JSON response
pub async fn post_json<T: Serialize, R: DeserializeOwned>(
    app: &Router,
    path: &str,
    body: &T,
) -> (StatusCode, Option<R>) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// POST a raw body, for payloads that are not valid JSON
pub async fn post_raw<R: DeserializeOwned>(
    app: &Router,
    path: &str,
    body: &'static str,
) -> (StatusCode, Option<R>) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap();

    send(app, request).await
}

async fn send<R: DeserializeOwned>(app: &Router, request: Request<Body>) -> (StatusCode, Option<R>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap_or_default();

    if body_bytes.is_empty() {
        return (status, None);
    }

    match serde_json::from_slice(&body_bytes) {
        Ok(data) => (status, Some(data)),
        Err(_) => (status, None),
    }
}

/// In-memory sink for formatted log lines
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Wait until `needle` shows up in the log, or give up after two seconds
    pub async fn wait_for(&self, needle: &str) -> bool {
        for _ in 0..200 {
            if self.contents().contains(needle) {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        false
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route this thread's tracing output into a buffer for as long as the guard lives.
///
/// Works with the default current-thread `#[tokio::test]` runtime, where
/// spawned tasks run on the test thread.
pub fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}
