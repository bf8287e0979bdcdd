//! Service info, health and diagnostic endpoints

use crate::server::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Result of the configuration self-check
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConfigStatusResponse {
    pub smtp_configured: bool,
    pub download_link_configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_link: Option<String>,
    pub errors: Vec<String>,
}

/// Figures shown on the marketing site
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlatformStats {
    pub players_coached: u32,
    pub videos_analyzed: u32,
    pub coaches_using: u32,
    pub academies_partnered: u32,
    pub avg_improvement: String,
}

impl PlatformStats {
    pub fn current() -> Self {
        Self {
            players_coached: 12500,
            videos_analyzed: 45000,
            coaches_using: 320,
            academies_partnered: 45,
            avg_improvement: "23%".to_string(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses((status = 200, description = "Service information", body = RootResponse))
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "CrickCoach AI API".to_string(),
        status: "operational".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "System",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/api/check-config",
    tag = "System",
    responses((status = 200, description = "Configuration self-check", body = ConfigStatusResponse))
)]
/// Report whether mail delivery and the download link are usable.
///
/// Checks the values actually loaded at startup.
pub async fn check_config(State(state): State<AppState>) -> Json<ConfigStatusResponse> {
    Json(config_status(&state))
}

fn config_status(state: &AppState) -> ConfigStatusResponse {
    let mut errors = Vec::new();

    let smtp_configured = state.config.mail.is_configured();
    if !smtp_configured {
        errors.push(
            "SMTP credentials not configured (set SMTP_USERNAME and SMTP_PASSWORD)".to_string(),
        );
    }

    let download_link_configured = state.config.download.is_configured();
    if !download_link_configured {
        errors.push("Download link not configured".to_string());
    }

    ConfigStatusResponse {
        smtp_configured,
        download_link_configured,
        download_link: state.config.download.share_link(),
        errors,
    }
}

#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "System",
    responses((status = 200, description = "Platform statistics", body = PlatformStats))
)]
pub async fn stats() -> Json<PlatformStats> {
    Json(PlatformStats::current())
}
