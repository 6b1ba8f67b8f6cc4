/**
 * Registration Handler
 *
 * This module implements the account registration handler for
 * POST /auth/register.
 *
 * # Registration Process
 *
 * 1. Validate name, email format, and password length
 * 2. Normalize the handle into its slug form
 * 3. Reject if the email or the slugged handle is already taken
 * 4. Hash the password with bcrypt
 * 5. Create the user with empty description, image, and link list
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt (DEFAULT_COST) before storage
 * - Passwords are never logged or returned in responses
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::backend::auth::credentials::hash_password;
use crate::backend::auth::handlers::types::RegisterRequest;
use crate::backend::error::ApiError;
use crate::backend::profile::store::{self, NewUser};
use crate::backend::server::state::AppState;
use crate::shared::handle::slugify;

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - empty name/handle, invalid email, or short password
/// * `409 Conflict` - email or handle already registered
/// * `500 Internal Server Error` - hashing or store failure
///
/// # Returns
///
/// `201 Created` with a plain text confirmation.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, &'static str), ApiError> {
    tracing::info!("Registration request for handle: {}", request.handle);

    if request.name.trim().is_empty() {
        return Err(ApiError::validation("Name must not be empty"));
    }

    let email = request.email.trim().to_string();
    if !email.contains('@') {
        return Err(ApiError::validation("Invalid e-mail address"));
    }

    if request.password.len() < 8 {
        return Err(ApiError::validation(
            "Password must be at least 8 characters",
        ));
    }

    let handle = slugify(&request.handle);
    if handle.is_empty() {
        return Err(ApiError::validation("Handle must not be empty"));
    }

    if store::find_by_email(&state.pool, &email).await?.is_some() {
        tracing::warn!("E-mail already registered: {email}");
        return Err(ApiError::conflict(
            "An account with that e-mail already exists",
        ));
    }

    if store::find_by_handle(&state.pool, &handle).await?.is_some() {
        tracing::warn!("Handle already taken: {handle}");
        return Err(ApiError::conflict("Handle is not available"));
    }

    let password_hash = hash_password(&request.password).map_err(|e| {
        tracing::error!("Failed to hash password: {e:?}");
        ApiError::internal("Something went wrong")
    })?;

    let user = store::create_user(
        &state.pool,
        NewUser {
            handle,
            name: request.name.trim().to_string(),
            email,
            password_hash,
        },
    )
    .await?;

    tracing::info!("User created: {} ({})", user.handle, user.email);

    Ok((StatusCode::CREATED, "Account created"))
}
