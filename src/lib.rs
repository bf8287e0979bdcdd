//! CrickCoach AI API
//!
//! Backend for the marketing website: health and diagnostic endpoints, static
//! platform stats, and three form submissions that each send one email over
//! an SMTP relay, either before the response or on a background task.

pub mod api;
pub mod config;
pub mod domain;
pub mod email;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod server;
pub mod service;
pub mod telemetry;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
