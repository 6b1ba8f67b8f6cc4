//! Backend Error Module
//!
//! This module defines the error taxonomy for the HTTP API.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # HTTP Response Conversion
//!
//! All API errors implement `IntoResponse` from Axum, allowing them to be
//! returned directly from handlers. The error is automatically converted to
//! its status code and a `{"error": "..."}` JSON body.
//!
//! # Example
//!
//! ```rust,no_run
//! use devtree::backend::error::ApiError;
//!
//! # fn example() -> Result<(), ApiError> {
//! // Handlers can return ApiError directly
//! Err(ApiError::not_found("User does not exist"))
//! # }
//! ```

/// Error type definitions
pub mod types;

// Re-export commonly used types
pub use types::{ApiError, ErrorBody};
