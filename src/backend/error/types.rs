/**
 * Backend Error Types
 *
 * This module defines the error taxonomy for the HTTP API. Every failure a
 * handler can produce maps to one of five categories, each tied to a single
 * HTTP status code. All of them render as a JSON body with one
 * human-readable `error` string.
 *
 * # Error Categories
 *
 * - `Validation` (400) - malformed or missing input
 * - `Auth` (401) - missing/invalid token or wrong password
 * - `NotFound` (404) - unknown handle or email
 * - `Conflict` (409) - duplicate unique field (email, handle)
 * - `Internal` (500) - store or upload failure
 *
 * Nothing is retried: every error is terminal for its request. Auth errors
 * never carry internal detail; internal errors are logged at the point of
 * conversion and surface only a generic message.
 */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::profile::store::StoreError;
use crate::backend::uploads::UploadError;

/// API error taxonomy
///
/// Each variant carries the message that becomes the `error` field of the
/// response body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input (400)
    #[error("{0}")]
    Validation(String),

    /// Missing/invalid credentials (401)
    #[error("{0}")]
    Auth(String),

    /// Unknown handle or email (404)
    #[error("{0}")]
    NotFound(String),

    /// Duplicate unique field (409)
    #[error("{0}")]
    Conflict(String),

    /// Store or upload failure (500)
    #[error("{0}")]
    Internal(String),
}

/// JSON body rendered for every failed request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable cause
    pub error: String,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Store failures never leak database detail to the caller. The one shape
/// with a client-facing meaning is a unique-constraint hit: a duplicate
/// email or handle can slip past the handler's existence check and land on
/// the constraint instead, and that is still a conflict, not a server error.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        if let StoreError::Database(sqlx::Error::Database(db)) = &err {
            if db.is_unique_violation() {
                return Self::Conflict("That e-mail or handle is already in use".to_string());
            }
        }
        tracing::error!("Store error: {err:?}");
        Self::Internal("Something went wrong".to_string())
    }
}

/// Upload failures surface as a generic 500; the cause is logged.
impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        tracing::error!("Upload error: {err:?}");
        Self::Internal("Failed to upload the image".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::validation("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::auth("no").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::not_found("missing").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::conflict("taken").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_message_is_body_text() {
        let error = ApiError::conflict("Handle is not available");
        assert_eq!(error.to_string(), "Handle is not available");
    }

}
