/**
 * Profile Handler Types
 *
 * Request and response types for the profile endpoints. Two projections of
 * the user record exist: the owner view (everything but the password hash)
 * and the public view (no id, email, or timestamps either).
 */

use serde::{Deserialize, Serialize};

use crate::backend::profile::store::User;
use crate::shared::links::SocialLink;

/// Owner view of an account, returned by GET /user
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// Public handle
    pub handle: String,
    /// Display name
    pub name: String,
    /// E-mail address
    pub email: String,
    /// Profile description
    pub description: String,
    /// Avatar URL (empty until an upload succeeds)
    pub image: String,
    /// Social links
    pub links: Vec<SocialLink>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            handle: user.handle,
            name: user.name,
            email: user.email,
            description: user.description,
            image: user.image,
            links: user.links,
        }
    }
}

/// Public view of a profile, returned by GET /{handle}
///
/// Excludes the id, email, and timestamps; the password hash never leaves
/// the store type.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PublicProfile {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub links: Vec<SocialLink>,
}

impl From<User> for PublicProfile {
    fn from(user: User) -> Self {
        Self {
            handle: user.handle,
            name: user.name,
            description: user.description,
            image: user.image,
            links: user.links,
        }
    }
}

/// PATCH /user body
#[derive(Deserialize, Serialize, Debug)]
pub struct UpdateProfileRequest {
    /// New handle (normalized server-side)
    pub handle: String,
    /// New description
    #[serde(default)]
    pub description: String,
    /// Full replacement link list
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

/// POST /search body
#[derive(Deserialize, Serialize, Debug)]
pub struct SearchRequest {
    /// Handle to check for availability
    pub handle: String,
}

/// POST /user/image response
#[derive(Serialize, Deserialize, Debug)]
pub struct ImageResponse {
    /// Hosted avatar URL
    pub image: String,
}
