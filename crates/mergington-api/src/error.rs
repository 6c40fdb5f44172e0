//! Error types for the activities API.
//!
//! [`ApiError`] unifies every way a request can be rejected and converts
//! into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Every
//! error body has the shape `{"detail": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mergington_directory::DirectoryError;
use mergington_types::ErrorDetail;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The referenced resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request broke a signup rule.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The query string could not be decoded.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// A required query parameter was absent.
    #[error("missing query parameter: {0}")]
    MissingParameter(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidRequest(_) | Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::MissingParameter(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// The `detail` string sent to the client.
    pub fn detail(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::InvalidRequest(msg) => msg.clone(),
            Self::InvalidQuery(reason) => format!("Invalid query string: {reason}"),
            Self::MissingParameter(name) => {
                format!("Missing required query parameter: {name}")
            }
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::ActivityNotFound(_) => {
                Self::NotFound(String::from("Activity not found"))
            }
            DirectoryError::AlreadySignedUp { .. } => {
                Self::InvalidRequest(String::from("Already signed up"))
            }
            DirectoryError::ActivityFull { .. } => {
                Self::InvalidRequest(String::from("Activity is full"))
            }
            DirectoryError::InvalidEmail(_) => {
                Self::InvalidRequest(String::from("Invalid email format"))
            }
            // Only raised while building a directory, never by a request.
            DirectoryError::DuplicateActivity(name) => {
                Self::InvalidRequest(format!("Duplicate activity: {name}"))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorDetail {
            detail: self.detail(),
        };
        (self.status(), Json(body)).into_response()
    }
}
