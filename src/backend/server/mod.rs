//! Server Module
//!
//! Server startup and shared state:
//!
//! - **`config`** - process-wide configuration, loaded once from the
//!   environment
//! - **`state`** - application state carried by every handler
//! - **`init`** - pool connection, migrations, router assembly

/// Process-wide configuration
pub mod config;

/// Application state
pub mod state;

/// Startup wiring
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::{create_app, StartupError};
pub use state::AppState;
