//! Remote generation errors.

use thiserror::Error;

/// Reasons the remote generation service is unavailable.
///
/// Every variant is recovered the same way: the caller falls back to the
/// local rule-based generator.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Network-level failure reaching the endpoint
    #[error("Connection to '{endpoint}' failed: {source}")]
    Connection {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// No response within the configured timeout
    #[error("Remote generation timed out after {duration}s")]
    Timeout { duration: u64 },

    /// Non-success status code
    #[error("Remote service returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Body was not JSON, or its components were not valid nodes
    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    /// JSON of a shape no accepted contract matches
    #[error("Unrecognized response shape: {found}")]
    UnrecognizedShape { found: &'static str },
}

impl RemoteError {
    /// Short machine-readable reason, for logs and status lines.
    pub fn error_type(&self) -> &'static str {
        match self {
            RemoteError::Client(_) => "client_error",
            RemoteError::Connection { .. } => "connection_error",
            RemoteError::Timeout { .. } => "timeout",
            RemoteError::Status { .. } => "status_error",
            RemoteError::InvalidBody(_) => "invalid_body",
            RemoteError::UnrecognizedShape { .. } => "unrecognized_shape",
        }
    }
}
