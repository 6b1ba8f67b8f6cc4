/**
 * Server Configuration
 *
 * This module collects all process-wide configuration into one explicit
 * struct, built once at startup and carried in the application state. No
 * component reads the environment after startup.
 *
 * # Configuration Sources
 *
 * Environment variables (a `.env` file is honored by the binary):
 *
 * - `DATABASE_URL`   - PostgreSQL connection string (required)
 * - `JWT_SECRET`     - token signing secret (required)
 * - `UPLOAD_URL`     - image host upload endpoint (required)
 * - `UPLOAD_PRESET`  - image host upload preset (required)
 * - `SERVER_PORT`    - listen port, defaults to 3000
 *
 * # Error Handling
 *
 * A missing required variable is a fatal startup error: the binary logs it
 * and exits non-zero instead of degrading.
 */

use thiserror::Error;

/// Configuration failure, fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

/// Process-wide configuration, constructed once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Token signing secret
    pub jwt_secret: String,
    /// Image host upload endpoint
    pub upload_url: String,
    /// Image host upload preset
    pub upload_preset: String,
    /// Listen port
    pub port: u16,
}

impl ServerConfig {
    /// Load the configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            jwt_secret: require("JWT_SECRET")?,
            upload_url: require("UPLOAD_URL")?,
            upload_preset: require("UPLOAD_PRESET")?,
            port: port_from_env()?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

fn port_from_env() -> Result<u16, ConfigError> {
    match std::env::var("SERVER_PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidVar("SERVER_PORT", e.to_string())),
        Err(_) => Ok(3000),
    }
}
