//! Email sending functionality
//!
//! - `provider`: the delivery trait and its error taxonomy
//! - `smtp`: relay delivery using lettre (implicit TLS or STARTTLS)
//! - `templates`: subject/body templates for every notification

pub mod provider;
pub mod smtp;
pub mod templates;

pub use provider::{EmailProvider, EmailProviderError};
pub use smtp::SmtpEmailProvider;
pub use templates::{EmailTemplate, RenderedEmail, TemplateEngine};
