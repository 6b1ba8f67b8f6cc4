/**
 * Update Profile Handler
 *
 * This module implements PATCH /user. The body replaces the caller's handle,
 * description, and link list in one write; concurrent updates by the same
 * account are last-write-wins by design.
 *
 * # Handle Uniqueness
 *
 * The incoming handle is slugged and re-checked for uniqueness, excluding
 * the caller's own record, so changing a handle to its current value never
 * reports a false conflict.
 */

use axum::extract::State;
use axum::Json;

use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::profile::handlers::types::UpdateProfileRequest;
use crate::backend::profile::store;
use crate::backend::server::state::AppState;
use crate::shared::handle::slugify;

/// Update profile handler
///
/// # Errors
///
/// * `400 Bad Request` - handle slugs to the empty string
/// * `409 Conflict` - handle belongs to a different account
/// * `500 Internal Server Error` - store failure
///
/// # Returns
///
/// `200 OK` with a plain text confirmation.
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<&'static str, ApiError> {
    let handle = slugify(&request.handle);
    if handle.is_empty() {
        return Err(ApiError::validation("Handle must not be empty"));
    }

    if let Some(owner) = store::find_by_handle(&state.pool, &handle).await? {
        if owner.id != user.id {
            tracing::warn!("Handle already taken: {handle}");
            return Err(ApiError::conflict("Handle is not available"));
        }
    }

    store::update_profile(
        &state.pool,
        user.id,
        &handle,
        &request.description,
        &request.links,
    )
    .await?;

    tracing::info!("Profile updated: {handle}");

    Ok("Profile updated")
}
