//! Error types for the speech service client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the speech service
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The service answered with a status other than the expected one
    #[error("API error (status {status}, expected {expected}): {message}")]
    ApiError {
        /// HTTP status code received
        status: u16,
        /// HTTP status code the operation succeeds with
        expected: u16,
        /// Raw response body
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create an API error from the received and expected status codes
    pub fn api_error(status: u16, expected: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            expected,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }
}
