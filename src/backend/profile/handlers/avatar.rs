/**
 * Avatar Upload Handler
 *
 * This module implements POST /user/image. The multipart body must carry one
 * `file` field; its bytes are pushed to the external image host under a
 * freshly generated public id, and the returned hosted URL is stored on the
 * account. The upload is a single awaited round trip with no retry.
 */

use axum::extract::{Multipart, State};
use axum::Json;
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::profile::handlers::types::ImageResponse;
use crate::backend::profile::store;
use crate::backend::server::state::AppState;

/// Avatar upload handler
///
/// # Errors
///
/// * `400 Bad Request` - no `file` field in the multipart body
/// * `500 Internal Server Error` - image host or store failure
///
/// # Returns
///
/// `200 OK` with `{"image": "<hosted url>"}`.
pub async fn upload_avatar(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    mut multipart: Multipart,
) -> Result<Json<ImageResponse>, ApiError> {
    let mut file: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::warn!("Malformed multipart body: {e:?}");
        ApiError::validation("Malformed upload body")
    })? {
        if field.name() == Some("file") {
            let bytes = field.bytes().await.map_err(|e| {
                tracing::warn!("Failed to read upload: {e:?}");
                ApiError::validation("Malformed upload body")
            })?;
            file = Some(bytes.to_vec());
        }
    }

    let file = file.ok_or_else(|| ApiError::validation("An image file is required"))?;

    let public_id = Uuid::new_v4();
    let image = state.uploads.upload(public_id, file).await?;

    store::update_image(&state.pool, user.id, &image).await?;

    tracing::info!("Avatar updated for {}: {image}", user.handle);

    Ok(Json(ImageResponse { image }))
}
