//! Authentication Module
//!
//! This module handles credentials, session tokens, and the public
//! authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── credentials.rs  - Password hashing and verification (bcrypt)
//! ├── tokens.rs       - Token issuance and validation (JWT)
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request types
//!     ├── register.rs - Account registration handler
//!     └── login.rs    - Login handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: handle/name/email/password → account created
//! 2. **Login**: email/password verified → signed token returned
//! 3. **Authenticated requests**: bearer token → middleware resolves the
//!    account and threads it into the handler
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are signed, carry only the user id, and expire after 30 days
//! - Every token failure maps to the same 401 response

/// Password hashing and verification
pub mod credentials;

/// Token issuance and validation
pub mod tokens;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, RegisterRequest};
pub use handlers::{login, register};
