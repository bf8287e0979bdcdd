//! REST API handlers and shared response types

pub mod health;
pub mod submission;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope returned by every submission endpoint on success
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmissionResponse {
    pub status: String,
    pub message: String,
    /// Only present for partnership inquiries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inquiry_id: Option<String>,
}

impl SubmissionResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            inquiry_id: None,
        }
    }

    pub fn with_inquiry_id(mut self, inquiry_id: impl Into<String>) -> Self {
        self.inquiry_id = Some(inquiry_id.into());
        self
    }
}
