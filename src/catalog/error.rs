//! Errors from the product API.

use thiserror::Error;

/// The only message a failed fetch ever shows the user.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load products";

/// Errors that can occur while calling the list or search endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure before a response arrived
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request to '{url}' timed out")]
    Timeout { url: String },

    /// Backend answered with a non-success status
    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    /// Response body was not the expected product envelope
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Base URL and path do not form a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl ApiError {
    /// User-facing message. Never includes backend text.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }

    /// Technical details for the diagnostic log.
    pub fn details(&self) -> String {
        match self {
            ApiError::Connection { source, .. } => format!("{} ({:?})", self, source),
            _ => self.to_string(),
        }
    }

    /// Transport-level failures that are worth retrying.
    pub fn is_transient(&self) -> bool {
        matches!(self, ApiError::Connection { .. } | ApiError::Timeout { .. })
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Connection { .. } => "connection_error",
            ApiError::Timeout { .. } => "timeout",
            ApiError::Server { .. } => "server_error",
            ApiError::Decode(_) => "decode_error",
            ApiError::InvalidUrl(_) => "invalid_url",
            ApiError::ClientBuild(_) => "client_build_error",
        }
    }
}
