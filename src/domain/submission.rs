//! Website form submissions
//!
//! Each type lives for a single request: it is deserialized from the body,
//! validated, rendered into an email and dropped.

use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use utoipa::ToSchema;
use validator::Validate;

/// Rendered in place of optional fields the submitter left out
pub const NOT_PROVIDED: &str = "Not provided";

/// Kind of organization behind a partnership inquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InquiryType {
    Academy,
    Club,
    Coach,
    Other,
}

impl InquiryType {
    /// Human-readable label used in notification emails
    pub fn label(&self) -> &'static str {
        match self {
            Self::Academy => "Cricket Academy",
            Self::Club => "Cricket Club",
            Self::Coach => "Individual Coach",
            Self::Other => "Other",
        }
    }
}

/// Partnership inquiry from an academy, club or coach
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PartnershipInquiry {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub organization: Option<String>,
    pub message: String,
    pub inquiry_type: InquiryType,
}

impl PartnershipInquiry {
    /// Organization for display; blank input counts as absent
    pub fn organization_or_default(&self) -> &str {
        self.organization
            .as_deref()
            .filter(|o| !o.trim().is_empty())
            .unwrap_or(NOT_PROVIDED)
    }

    /// Display-only reference for the inquiry.
    ///
    /// Derived from the email alone, so repeated submissions from one address
    /// share an id and distinct addresses may collide.
    pub fn inquiry_id(&self) -> String {
        let mut hasher = DefaultHasher::new();
        self.email.hash(&mut hasher);
        format!("INQ-{}", hasher.finish() % 10_000)
    }
}

/// Request to receive the Android APK by email
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AppDownloadRequest {
    #[validate(email)]
    pub email: String,
    pub name: Option<String>,
}

/// General contact form
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ContactForm {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn inquiry(email: &str) -> PartnershipInquiry {
        PartnershipInquiry {
            name: "Ravi".to_string(),
            email: email.to_string(),
            organization: None,
            message: "We'd like to partner".to_string(),
            inquiry_type: InquiryType::Academy,
        }
    }

    #[rstest]
    #[case("academy", InquiryType::Academy, "Cricket Academy")]
    #[case("club", InquiryType::Club, "Cricket Club")]
    #[case("coach", InquiryType::Coach, "Individual Coach")]
    #[case("other", InquiryType::Other, "Other")]
    fn test_inquiry_type_labels(
        #[case] raw: &str,
        #[case] expected: InquiryType,
        #[case] label: &str,
    ) {
        let parsed: InquiryType = serde_json::from_value(serde_json::json!(raw)).unwrap();
        assert_eq!(parsed, expected);
        assert_eq!(parsed.label(), label);
    }

    #[test]
    fn test_unknown_inquiry_type_rejected() {
        let result: Result<InquiryType, _> = serde_json::from_str("\"sponsor\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_inquiry_id_is_stable_per_email() {
        let a = inquiry("coach@example.com").inquiry_id();
        let b = inquiry("coach@example.com").inquiry_id();
        assert_eq!(a, b);
        assert!(a.starts_with("INQ-"));

        let n: u64 = a.trim_start_matches("INQ-").parse().unwrap();
        assert!(n < 10_000);
    }

    #[test]
    fn test_organization_defaults_to_not_provided() {
        let mut form = inquiry("coach@example.com");
        assert_eq!(form.organization_or_default(), NOT_PROVIDED);

        form.organization = Some("Mumbai Cricket Academy".to_string());
        assert_eq!(form.organization_or_default(), "Mumbai Cricket Academy");
    }

    #[test]
    fn test_blank_organization_is_not_provided() {
        let mut form = inquiry("coach@example.com");

        form.organization = Some(String::new());
        assert_eq!(form.organization_or_default(), NOT_PROVIDED);

        form.organization = Some("   ".to_string());
        assert_eq!(form.organization_or_default(), NOT_PROVIDED);
    }

    #[test]
    fn test_partnership_inquiry_email_validation() {
        assert!(inquiry("coach@example.com").validate().is_ok());
        assert!(inquiry("not-an-email").validate().is_err());
    }

    #[test]
    fn test_app_download_request_optional_name() {
        let request: AppDownloadRequest =
            serde_json::from_str(r#"{"email": "player@example.com"}"#).unwrap();
        assert!(request.name.is_none());
        assert!(request.validate().is_ok());

        let request = AppDownloadRequest {
            email: "player@".to_string(),
            name: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_contact_form_requires_all_fields() {
        let result: Result<ContactForm, _> =
            serde_json::from_str(r#"{"name": "A", "email": "a@example.com", "message": "hi"}"#);
        assert!(result.is_err());
    }
}
