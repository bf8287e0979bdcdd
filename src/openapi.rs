//! OpenAPI 3.0 documentation assembly
//!
//! Collects the handler path annotations and request/response schemas into
//! the document served at `/openapi.json`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CrickCoach AI API",
        description = "Backend for the CrickCoach AI website: partnership inquiries, APK download requests and contact messages",
        contact(name = "CrickCoach AI Team")
    ),
    tags(
        (name = "System", description = "Service info, health and configuration checks"),
        (name = "Submissions", description = "Website forms that trigger an email"),
    ),
    components(
        schemas(
            // ── Responses ──────────────────────────────────────────────
            crate::api::SubmissionResponse,
            crate::api::health::RootResponse,
            crate::api::health::HealthResponse,
            crate::api::health::ConfigStatusResponse,
            crate::api::health::PlatformStats,
            crate::error::ErrorResponse,

            // ── Submissions ────────────────────────────────────────────
            crate::domain::PartnershipInquiry,
            crate::domain::InquiryType,
            crate::domain::AppDownloadRequest,
            crate::domain::ContactForm,
        ),
    ),
    paths(
        // ── System ─────────────────────────────────────────────────
        crate::api::health::root,
        crate::api::health::health,
        crate::api::health::check_config,
        crate::api::health::stats,

        // ── Submissions ────────────────────────────────────────────
        crate::api::submission::submit_partnership_inquiry,
        crate::api::submission::request_app_download,
        crate::api::submission::submit_contact_form,
    ),
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn build() -> utoipa::openapi::OpenApi {
        let mut doc = Self::openapi();
        doc.info.version = env!("CARGO_PKG_VERSION").to_string();
        doc
    }
}
