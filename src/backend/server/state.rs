/**
 * Application State Management
 *
 * This module defines the application state shared across all request
 * handlers. The state is cheap to clone: the pool and HTTP client are
 * internally reference-counted, and the configuration sits behind an `Arc`.
 *
 * There is no other in-process shared mutable state; every profile update is
 * a full read-modify-write against the caller's own row, last write wins.
 */

use sqlx::PgPool;
use std::sync::Arc;

use crate::backend::server::config::ServerConfig;
use crate::backend::uploads::ImageHost;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool (safe for concurrent use)
    pub pool: PgPool,
    /// Process-wide configuration, loaded once at startup
    pub config: Arc<ServerConfig>,
    /// Image host client for avatar uploads
    pub uploads: ImageHost,
}

impl AppState {
    /// Assemble the state from its startup pieces.
    pub fn new(pool: PgPool, config: ServerConfig) -> Self {
        let uploads = ImageHost::new(config.upload_url.clone(), config.upload_preset.clone());
        Self {
            pool,
            config: Arc::new(config),
            uploads,
        }
    }
}
