//! Error types for the proxy server
//!
//! Provides unified error handling using thiserror. Upstream failures keep
//! their identity (not-found vs unavailable vs other status) all the way to
//! the HTTP boundary, which maps them to user-facing status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Api Error Enum ==
/// Unified error type for the proxy server.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The requested resource does not exist upstream (404-class)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Upstream responded with a non-success status other than 404
    #[error("Upstream error ({status}): {message}")]
    UpstreamStatus { status: u16, message: String },

    /// Upstream could not be reached (transport failure or timeout)
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Missing, malformed, invalid, or expired credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code this error maps to at the boundary.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UpstreamStatus { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            ApiError::NotFound(msg) => msg.clone(),
            ApiError::UpstreamStatus { message, .. } => message.clone(),
            ApiError::UpstreamUnavailable(_) => "External API unavailable".to_string(),
            ApiError::InvalidRequest(msg) => msg.clone(),
            ApiError::Unauthorized(msg) => msg.clone(),
            ApiError::Internal(msg) => msg.clone(),
        };

        let body = Json(json!({
            "error": message,
            "statusCode": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

// == Reqwest Conversion ==
impl From<reqwest::Error> for ApiError {
    /// Maps transport-level reqwest failures onto the error taxonomy.
    ///
    /// Status-bearing responses are classified by the upstream client before
    /// the body is consumed, so by the time an error reaches this conversion
    /// it is a connect failure, timeout, or body decode problem.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() || err.is_request() {
            ApiError::UpstreamUnavailable(err.to_string())
        } else if err.is_decode() {
            ApiError::Internal(format!("Failed to decode upstream response: {err}"))
        } else {
            ApiError::UpstreamUnavailable(err.to_string())
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the proxy server.
pub type Result<T> = std::result::Result<T, ApiError>;
