//! devtree - Link-in-bio service
//!
//! devtree is a small "link-in-bio" web application: users register,
//! authenticate, edit a profile (handle, description, avatar, social links),
//! and expose a public page listing their enabled links in a chosen order.
//!
//! # Module Structure
//!
//! The library is organized into two modules:
//!
//! - **`shared`** - types usable by any client of the API
//!   - The social link record and the ordered link list (`LinkBoard`)
//!   - Handle normalization
//!
//! - **`backend`** - the Axum HTTP server
//!   - Route configuration and authentication middleware
//!   - Registration, login, profile, and upload handlers
//!   - PostgreSQL persistence via sqlx
//!
//! # Usage
//!
//! ```rust,no_run
//! use devtree::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Serve app with Axum
//! # Ok(())
//! # }
//! ```

/// Types shared between the server and API clients
pub mod shared;

/// Server-side code
pub mod backend;
