//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when making HTTP requests.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The exchange itself could not complete.
    #[error("request failed: {0}")]
    Transport(String),

    /// The transport-layer timeout elapsed.
    #[error("request timed out")]
    Timeout,

    /// The endpoint answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body could not be parsed.
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// A request body could not be serialized.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Json(e.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}
