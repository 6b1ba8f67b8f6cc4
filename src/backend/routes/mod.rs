//! Routes Module
//!
//! HTTP route configuration. See `router` for the full route table and the
//! split between public and token-protected endpoints.

/// Router assembly
pub mod router;

pub use router::create_router;
