/**
 * Authentication Middleware
 *
 * This middleware protects routes that require an authenticated caller. It
 * extracts the bearer token from the Authorization header, verifies it,
 * resolves the embedded user id against the store, and threads the resolved
 * account into the handler via the `AuthUser` extractor.
 *
 * Every failure on this path (missing header, bad prefix, invalid token,
 * unknown user) is the same 401 response; callers cannot distinguish why.
 */

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::backend::auth::tokens::verify_token;
use crate::backend::error::ApiError;
use crate::backend::profile::store::{self, User};
use crate::backend::server::state::AppState;

/// Resolved identity of the caller, inserted into request extensions by the
/// middleware and pulled out by handlers as an extractor.
#[derive(Clone, Debug)]
pub struct AuthUser(pub User);

/// Authentication middleware
///
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Resolves the user id claim against the store
/// 4. Attaches the resolved account to request extensions
///
/// Returns 401 Unauthorized on any failure.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::auth("Not authorized")
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ApiError::auth("Not authorized")
    })?;

    let claims = verify_token(&state.config.jwt_secret, token).map_err(|e| {
        tracing::warn!("Invalid token: {e:?}");
        ApiError::auth("Not authorized")
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("Invalid user id in token: {e:?}");
        ApiError::auth("Not authorized")
    })?;

    let user = store::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token for unknown user: {user_id}");
            ApiError::auth("Not authorized")
        })?;

    request.extensions_mut().insert(AuthUser(user));

    Ok(next.run(request).await)
}

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthUser not found in request extensions");
                ApiError::auth("Not authorized")
            })
    }
}
