//! Error types for the tutoring backend integration

use thiserror::Error;

/// Errors that can occur when asking the backend for an answer
#[derive(Debug, Error)]
pub enum TutorError {
    /// HTTP request failed (backend down, DNS, timeout)
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Backend returned a non-success status
    #[error("Backend error ({status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error body from the backend
        message: String,
    },

    /// Response body did not decode as an answer
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
