//! Domain-specific error types for driver-review

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Main error type for the driver-review service.
///
/// The scoring engine itself never fails; these variants cover startup
/// (configuration, binding) and request validation at the HTTP edge.
#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("{message}")]
    Validation { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },
}

impl ReviewError {
    pub fn validation(message: impl Into<String>) -> Self {
        ReviewError::Validation {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        ReviewError::Config {
            message: message.into(),
        }
    }

    /// HTTP status this error surfaces as.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReviewError::Validation { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<toml::de::Error> for ReviewError {
    fn from(err: toml::de::Error) -> Self {
        ReviewError::Config {
            message: format!("Invalid TOML: {}", err),
        }
    }
}

impl From<std::io::Error> for ReviewError {
    fn from(err: std::io::Error) -> Self {
        ReviewError::Io {
            message: err.to_string(),
        }
    }
}

/// Convert ReviewError to an HTTP response with a JSON `error` body
impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        } else {
            tracing::debug!("rejected request: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Result type alias for driver-review operations
pub type Result<T> = std::result::Result<T, ReviewError>;
