/**
 * Get Current User Handler
 *
 * This module implements GET /user, returning the authenticated account
 * without its password hash. The identity arrives as an `AuthUser` value
 * resolved by the authentication middleware.
 */

use axum::Json;

use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::profile::handlers::types::UserResponse;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - handled by the middleware before this runs
pub async fn me(AuthUser(user): AuthUser) -> Result<Json<UserResponse>, ApiError> {
    Ok(Json(user.into()))
}
