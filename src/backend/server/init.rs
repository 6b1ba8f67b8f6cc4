/**
 * Server Initialization
 *
 * This module wires startup together: connect the database pool, run the
 * migrations, build the shared state, and assemble the router. Any failure
 * here is fatal; the caller aborts the process rather than serving degraded.
 */

use axum::Router;
use sqlx::PgPool;
use thiserror::Error;

use crate::backend::routes::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Fatal startup failure
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to run migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Connect, migrate, and build the application router.
pub async fn create_app(config: ServerConfig) -> Result<Router, StartupError> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    let state = AppState::new(pool, config);
    Ok(create_router(state))
}
