/**
 * Login Handler
 *
 * This module implements the authentication handler for POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up the account by email
 * 2. Verify the password against the stored bcrypt hash
 * 3. Issue a signed token carrying the user id
 *
 * # Security
 *
 * - Unknown email and wrong password are distinct statuses (404 vs 401),
 *   matching the public API contract
 * - The response body is the bare token string, opaque to clients
 * - Passwords are never logged or returned in responses
 */

use axum::extract::State;
use axum::Json;

use crate::backend::auth::credentials::verify_password;
use crate::backend::auth::handlers::types::LoginRequest;
use crate::backend::auth::tokens::issue_token;
use crate::backend::error::ApiError;
use crate::backend::profile::store;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - empty password or malformed email
/// * `404 Not Found` - no account with that email
/// * `401 Unauthorized` - wrong password
/// * `500 Internal Server Error` - store or token failure
///
/// # Returns
///
/// `200 OK` with the opaque token string as the body.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<String, ApiError> {
    let email = request.email.trim();
    tracing::info!("Login request for: {email}");

    if !email.contains('@') {
        return Err(ApiError::validation("Invalid e-mail address"));
    }
    if request.password.is_empty() {
        return Err(ApiError::validation("Password must not be empty"));
    }

    let user = store::find_by_email(&state.pool, email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Unknown e-mail: {email}");
            ApiError::not_found("No account with that e-mail")
        })?;

    let valid = verify_password(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {e:?}");
        ApiError::internal("Something went wrong")
    })?;

    if !valid {
        tracing::warn!("Invalid password for: {email}");
        return Err(ApiError::auth("Incorrect password"));
    }

    let token = issue_token(&state.config.jwt_secret, user.id).map_err(|e| {
        tracing::error!("Failed to issue token: {e:?}");
        ApiError::internal("Something went wrong")
    })?;

    tracing::info!("User logged in: {}", user.handle);

    Ok(token)
}
