//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur talking to the analysis server
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Could not read image file: {0}")]
    ImageUnreadable(#[from] std::io::Error),

    #[error("Server rejected request (HTTP {status}): {detail}")]
    Rejected { status: u16, detail: String },
}

/// Errors that can occur while decoding a data line into an event
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors that can occur while consuming the analysis stream
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Stream read failed: {0}")]
    Transport(#[from] std::io::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
