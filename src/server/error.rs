//! Error types and JSON error responses for the editor API.

use axum::body::Body;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use uuid::Uuid;

use crate::pipeline::GenerateError;

/// Errors surfaced by API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Generation requested with a blank prompt
    #[error("Please enter a description")]
    EmptyInput,

    /// Another generation is still outstanding
    #[error("A generation is already in progress")]
    Busy,

    /// Index outside the current document
    #[error("No component at index {index}")]
    NodeNotFound { index: usize },

    /// Invalid request format or parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<GenerateError> for ApiError {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::EmptyInput => ApiError::EmptyInput,
            GenerateError::Busy => ApiError::Busy,
        }
    }
}

impl ApiError {
    /// Map error variant to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::EmptyInput => StatusCode::BAD_REQUEST,
            ApiError::Busy => StatusCode::CONFLICT,
            ApiError::NodeNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get error type string for JSON responses
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::EmptyInput => "empty_input",
            ApiError::Busy => "generation_in_progress",
            ApiError::NodeNotFound { .. } => "node_not_found",
            ApiError::InvalidRequest(_) => "invalid_request",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let request_id = Uuid::new_v4().to_string();
        tracing::debug!(
            request_id = %request_id,
            error_type = self.error_type(),
            "{}", self
        );
        ErrorResponse::from_error(&self, &request_id)
    }
}

/// Builder for standardized error responses
pub struct ErrorResponse;

impl ErrorResponse {
    /// Create a JSON error response from an ApiError
    pub fn from_error(err: &ApiError, request_id: &str) -> Response {
        let body = serde_json::json!({
            "error": {
                "type": err.error_type(),
                "message": err.to_string(),
                "request_id": request_id
            }
        });

        let mut response = Response::new(Body::from(body.to_string()));
        *response.status_mut() = err.status_code();
        response.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderValue::from_static("application/json"),
        );
        response
    }
}
