//! HTTP communication with the NutriX analysis server.

pub mod client;
pub mod types;

// Re-export main types
pub use client::ApiClient;
pub use types::{ErrorResponse, ReportRequest};
