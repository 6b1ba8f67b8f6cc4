/**
 * Authentication Handler Types
 *
 * This module defines the request types used by the registration and login
 * handlers.
 */

use serde::{Deserialize, Serialize};

/// Registration request
///
/// The handle is slugged server-side before any uniqueness check.
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Desired public handle (normalized before storage)
    pub handle: String,
    /// Display name
    pub name: String,
    /// E-mail address
    pub email: String,
    /// Password (hashed before storage, minimum 8 characters)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// E-mail address the account was registered with
    pub email: String,
    /// Password (verified against the stored hash)
    pub password: String,
}
