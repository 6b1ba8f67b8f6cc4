/**
 * Profile Handlers
 *
 * HTTP handlers for the profile endpoints, both authenticated (owner view,
 * update, avatar upload) and public (profile lookup, availability search).
 */

/// Request/response types and projections
pub mod types;

/// GET /user
pub mod me;

/// PATCH /user
pub mod update;

/// POST /user/image
pub mod avatar;

/// GET /{handle} and POST /search
pub mod public;

pub use avatar::upload_avatar;
pub use me::me;
pub use public::{get_by_handle, search_by_handle};
pub use update::update_profile;
