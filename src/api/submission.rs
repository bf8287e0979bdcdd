//! Website form submission endpoints
//!
//! Each handler validates its body, hands delivery to the dispatch policy and
//! shapes the success envelope. In synchronous mode a delivery failure is
//! returned as a 500 carrying the cause.

use crate::api::SubmissionResponse;
use crate::domain::{AppDownloadRequest, ContactForm, PartnershipInquiry};
use crate::error::{AppError, Result};
use crate::server::AppState;
use crate::service::dispatch;
use axum::{extract::State, Json};
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/partnership-inquiry",
    tag = "Submissions",
    request_body = PartnershipInquiry,
    responses(
        (status = 200, description = "Inquiry accepted", body = SubmissionResponse),
        (status = 422, description = "Invalid submission", body = crate::error::ErrorResponse),
        (status = 500, description = "Email delivery failed", body = crate::error::ErrorResponse)
    )
)]
/// Notify the admin inbox about a partnership inquiry
pub async fn submit_partnership_inquiry(
    State(state): State<AppState>,
    Json(input): Json<PartnershipInquiry>,
) -> Result<Json<SubmissionResponse>> {
    input.validate()?;

    let inquiry_id = input.inquiry_id();
    let notifications = state.notifications.clone();

    dispatch(
        state.config.email_send_mode,
        "partnership-inquiry",
        input.email.clone(),
        async move { notifications.send_partnership_inquiry(&input).await },
    )
    .await
    .map_err(|e| AppError::EmailDelivery(format!("Failed to submit inquiry: {}", e)))?;

    Ok(Json(
        SubmissionResponse::success("Thank you for your interest. We'll be in touch soon.")
            .with_inquiry_id(inquiry_id),
    ))
}

#[utoipa::path(
    post,
    path = "/api/app-download",
    tag = "Submissions",
    request_body = AppDownloadRequest,
    responses(
        (status = 200, description = "Download email sent", body = SubmissionResponse),
        (status = 422, description = "Invalid email address", body = crate::error::ErrorResponse),
        (status = 500, description = "Email delivery failed", body = crate::error::ErrorResponse)
    )
)]
/// Email the Android APK links to the requester
pub async fn request_app_download(
    State(state): State<AppState>,
    Json(input): Json<AppDownloadRequest>,
) -> Result<Json<SubmissionResponse>> {
    input.validate()?;

    let notifications = state.notifications.clone();

    dispatch(
        state.config.email_send_mode,
        "app-download",
        input.email.clone(),
        async move { notifications.send_app_download(&input).await },
    )
    .await
    .map_err(|e| AppError::EmailDelivery(format!("Failed to send email: {}", e)))?;

    Ok(Json(SubmissionResponse::success("APK sent to your email.")))
}

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "Submissions",
    request_body = ContactForm,
    responses(
        (status = 200, description = "Message accepted", body = SubmissionResponse),
        (status = 422, description = "Invalid submission", body = crate::error::ErrorResponse),
        (status = 500, description = "Email delivery failed", body = crate::error::ErrorResponse)
    )
)]
/// Forward a general contact message to the admin inbox
pub async fn submit_contact_form(
    State(state): State<AppState>,
    Json(input): Json<ContactForm>,
) -> Result<Json<SubmissionResponse>> {
    input.validate()?;

    let notifications = state.notifications.clone();

    dispatch(
        state.config.email_send_mode,
        "contact-form",
        input.email.clone(),
        async move { notifications.send_contact_form(&input).await },
    )
    .await
    .map_err(|e| AppError::EmailDelivery(format!("Failed to submit contact form: {}", e)))?;

    Ok(Json(SubmissionResponse::success(
        "Thank you for reaching out. We'll respond shortly.",
    )))
}
