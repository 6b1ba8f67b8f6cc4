//! Middleware Module
//!
//! This module contains all HTTP middleware for the backend server.
//! Middleware functions process requests before they reach handlers.
//!
//! # Architecture
//!
//! The middleware module currently provides:
//!
//! - **`auth`** - Authentication middleware for protecting routes

pub mod auth;

pub use auth::{auth_middleware, AuthUser};
