//! Domain types: form submissions and outbound email

pub mod email;
pub mod submission;

pub use email::{EmailAddress, OutboundEmail, TransportMode, IMPLICIT_TLS_PORTS};
pub use submission::{
    AppDownloadRequest, ContactForm, InquiryType, PartnershipInquiry, NOT_PROVIDED,
};
