//! Profile Module
//!
//! This module owns the user record: its storage operations and the HTTP
//! handlers that read and mutate profiles.
//!
//! # Module Structure
//!
//! ```text
//! profile/
//! ├── mod.rs      - Module exports and documentation
//! ├── store.rs    - User model and database operations
//! └── handlers/   - HTTP handlers
//!     ├── types.rs  - Request/response types and projections
//!     ├── me.rs     - Owner view
//!     ├── update.rs - Profile update
//!     ├── avatar.rs - Avatar upload
//!     └── public.rs - Public lookup and availability search
//! ```
//!
//! # Storage Boundary
//!
//! The `links` column is one opaque JSON string in the database. The store
//! decodes it into `Vec<SocialLink>` on every read and encodes on every
//! write; handler code only ever sees the typed form.

/// User model and database operations
pub mod store;

/// HTTP handlers for profile endpoints
pub mod handlers;

pub use handlers::types::{PublicProfile, UpdateProfileRequest, UserResponse};
pub use handlers::{get_by_handle, me, search_by_handle, update_profile, upload_avatar};
pub use store::{StoreError, User};
