//! HTTP server setup

use crate::api;
use crate::config::Config;
use crate::middleware::normalize_error_response;
use crate::openapi::ApiDoc;
use crate::service::{EmailProviderFactory, EmailService, NotificationService};
use anyhow::{Context, Result};
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub notifications: Arc<NotificationService>,
}

impl AppState {
    /// State backed by the real SMTP relay
    pub fn new(config: Arc<Config>) -> Self {
        let email_service = Arc::new(EmailService::new(config.mail.clone()));
        Self::from_email_service(config, email_service)
    }

    /// State whose deliveries go through `factory` instead of lettre
    pub fn with_factory(config: Arc<Config>, factory: Arc<dyn EmailProviderFactory>) -> Self {
        let email_service = Arc::new(EmailService::with_factory(config.mail.clone(), factory));
        Self::from_email_service(config, email_service)
    }

    fn from_email_service(config: Arc<Config>, email_service: Arc<EmailService>) -> Self {
        let notifications = Arc::new(NotificationService::new(
            email_service,
            config.download.clone(),
        ));
        Self {
            config,
            notifications,
        }
    }
}

/// Run the HTTP server
pub async fn run(config: Config) -> Result<()> {
    let config = Arc::new(config);

    if !config.mail.is_configured() {
        warn!("SMTP credentials are not set; email delivery will fail until SMTP_USERNAME and SMTP_PASSWORD are provided");
    }
    info!(
        smtp_host = %config.mail.host,
        smtp_port = config.mail.port,
        from = %config.mail.from_mailbox(),
        transport = %crate::domain::TransportMode::for_port(config.mail.port),
        email_send_mode = config.email_send_mode.as_str(),
        "Mail relay configured"
    );

    let app = build_router(AppState::new(config.clone()));

    let http_addr = config.http_addr();
    let listener = TcpListener::bind(&http_addr)
        .await
        .with_context(|| format!("Failed to bind {}", http_addr))?;
    info!("HTTP server started on {}", http_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the HTTP router
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_allow_origins);

    Router::new()
        .route("/", get(api::health::root))
        .route("/api/health", get(api::health::health))
        .route("/api/check-config", get(api::health::check_config))
        .route("/api/stats", get(api::health::stats))
        // Form submissions
        .route(
            "/api/partnership-inquiry",
            post(api::submission::submit_partnership_inquiry),
        )
        .route(
            "/api/app-download",
            post(api::submission::request_app_download),
        )
        .route("/api/contact", post(api::submission::submit_contact_form))
        .route("/openapi.json", get(|| async { Json(ApiDoc::build()) }))
        // Add middleware
        .layer(axum::middleware::from_fn(normalize_error_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// CORS for the website origins; credentials allowed, methods and headers mirrored
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
