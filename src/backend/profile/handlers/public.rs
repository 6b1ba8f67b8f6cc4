/**
 * Public Profile Handlers
 *
 * Unauthenticated read endpoints:
 *
 * - GET /{handle} - the public projection of a profile
 * - POST /search  - handle availability check
 *
 * Both resolve handles through the store; they are deliberately independent
 * endpoints even though their lookups overlap.
 */

use axum::extract::{Path, State};
use axum::Json;

use crate::backend::error::ApiError;
use crate::backend::profile::handlers::types::{PublicProfile, SearchRequest};
use crate::backend::profile::store;
use crate::backend::server::state::AppState;
use crate::shared::handle::slugify;

/// Public profile lookup
///
/// # Errors
///
/// * `404 Not Found` - unknown handle
pub async fn get_by_handle(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<PublicProfile>, ApiError> {
    let user = store::find_by_handle(&state.pool, &handle)
        .await?
        .ok_or_else(|| ApiError::not_found("User does not exist"))?;

    Ok(Json(user.into()))
}

/// Handle availability check
///
/// Existence of the (slugged) handle means "taken" and reports a conflict;
/// otherwise the handle is available.
///
/// # Errors
///
/// * `400 Bad Request` - handle slugs to the empty string
/// * `409 Conflict` - handle is already registered
pub async fn search_by_handle(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<String, ApiError> {
    let handle = slugify(&request.handle);
    if handle.is_empty() {
        return Err(ApiError::validation("Handle must not be empty"));
    }

    if store::find_by_handle(&state.pool, &handle).await?.is_some() {
        return Err(ApiError::conflict(format!("{handle} is already taken")));
    }

    Ok(format!("{handle} is available"))
}
