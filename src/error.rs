//! Error types for Cloud Controller operations.

use thiserror::Error;

/// Errors that can occur while building a report.
#[derive(Debug, Error)]
pub enum CfError {
    /// Configuration is missing or incomplete.
    #[error("cf configuration required: {0}")]
    ConfigMissing(String),

    /// The Cloud Controller answered with something other than 200 OK.
    #[error("Cloud Controller error (status {status_code}): {message}")]
    ApiError { message: String, status_code: u16 },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// I/O error while reading config or writing a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for report operations.
pub type Result<T> = core::result::Result<T, CfError>;
