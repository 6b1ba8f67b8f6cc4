/**
 * Router Configuration
 *
 * This module assembles the full route table. Protected routes sit behind
 * the authentication middleware; public routes do not. The catch-all
 * `GET /{handle}` is registered last so the fixed paths win.
 *
 * # Routes
 *
 * ## Public
 * - `POST /auth/register` - account registration
 * - `POST /auth/login`    - login, returns a bearer token
 * - `POST /search`        - handle availability check
 * - `GET  /{handle}`      - public profile
 *
 * ## Protected (bearer token required)
 * - `GET   /user`       - owner view of the account
 * - `PATCH /user`       - update handle/description/links
 * - `POST  /user/image` - avatar upload
 */

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::backend::auth::{login, register};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::profile::{
    get_by_handle, me, search_by_handle, update_profile, upload_avatar,
};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(state: AppState) -> Router<()> {
    let protected = Router::new()
        .route("/user", get(me).patch(update_profile))
        .route("/user/image", post(upload_avatar))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let public = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/search", post(search_by_handle))
        .route("/{handle}", get(get_by_handle));

    Router::new()
        .merge(protected)
        .merge(public)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
