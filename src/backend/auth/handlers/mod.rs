/**
 * Authentication Handlers
 *
 * HTTP handlers for the public authentication endpoints.
 */

/// Request types
pub mod types;

/// POST /auth/register
pub mod register;

/// POST /auth/login
pub mod login;

pub use login::login;
pub use register::register;
