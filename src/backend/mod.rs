//! Backend Module
//!
//! This module contains all server-side code for the devtree application:
//! a REST API over PostgreSQL that handles registration, authentication,
//! profile editing, avatar upload, and public profile reads.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - configuration, application state, startup wiring
//! - **`routes`** - HTTP route configuration
//! - **`auth`** - credentials, tokens, registration and login handlers
//! - **`profile`** - user store and profile handlers
//! - **`uploads`** - image host client for avatar uploads
//! - **`middleware`** - authentication middleware
//! - **`error`** - API error taxonomy
//!
//! # Request Flow
//!
//! Every request runs to completion independently: route → (middleware) →
//! handler → store. The only shared state is the connection pool; profile
//! updates are last-write-wins with no locking. Nothing is retried.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>`; every failure renders as a JSON
//! `{"error": "..."}` body with a status from {400, 401, 404, 409, 500}.
//! Auth failures never carry internal detail.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication: credentials, tokens, handlers
pub mod auth;

/// User store and profile handlers
pub mod profile;

/// Image host client
pub mod uploads;

/// Middleware for request processing
pub mod middleware;

/// API error types
pub mod error;

/// Re-export commonly used types
pub use error::ApiError;
pub use routes::create_router;
pub use server::{create_app, AppState, ServerConfig};
