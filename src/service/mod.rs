//! Business services: delivery, composition and dispatch policy

pub mod dispatch;
pub mod email;
pub mod notification;

pub use dispatch::{dispatch, DispatchMode};
pub use email::{EmailProviderFactory, EmailService, SmtpProviderFactory};
pub use notification::NotificationService;
