/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations. The `links` column
 * is persisted as one opaque JSON string; it is decoded into a typed
 * `Vec<SocialLink>` here at the storage boundary and nowhere else, so the
 * rest of the server only ever sees the typed form.
 */

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::links::SocialLink;

/// User record as the rest of the server sees it
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID (UUID), assigned at creation
    pub id: Uuid,
    /// Public profile slug (unique, lowercase)
    pub handle: String,
    /// Display name
    pub name: String,
    /// E-mail address (unique)
    pub email: String,
    /// Hashed password (bcrypt), never serialized outward
    pub password_hash: String,
    /// Free-text profile description
    pub description: String,
    /// Hosted avatar URL, empty until an upload succeeds
    pub image: String,
    /// Social links, decoded from the stored JSON string
    pub links: Vec<SocialLink>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a user
#[derive(Debug)]
pub struct NewUser {
    pub handle: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Store failure: the query itself, or the links column failing to decode
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("stored links are not valid JSON: {0}")]
    Links(#[from] serde_json::Error),
}

/// Raw row shape, with links still encoded
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    handle: String,
    name: String,
    email: String,
    password_hash: String,
    description: String,
    image: String,
    links: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = serde_json::Error;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let links = serde_json::from_str(&row.links)?;
        Ok(User {
            id: row.id,
            handle: row.handle,
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            description: row.description,
            image: row.image,
            links,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const USER_COLUMNS: &str =
    "id, handle, name, email, password_hash, description, image, links, created_at, updated_at";

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `new_user` - Handle (already slugged), name, email, and password hash
///
/// # Returns
/// Created user or error. The links column starts as the empty list.
pub async fn create_user(pool: &PgPool, new_user: NewUser) -> Result<User, StoreError> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (id, handle, name, email, password_hash, description, image, links, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, '', '', '[]', $6, $7)
        RETURNING id, handle, name, email, password_hash, description, image, links, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&new_user.handle)
    .bind(&new_user.name)
    .bind(&new_user.email)
    .bind(&new_user.password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row.try_into()?)
}

/// Get user by email
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, StoreError> {
    let row = sqlx::query_as::<_, UserRow>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;

    row.map(User::try_from).transpose().map_err(StoreError::from)
}

/// Get user by handle (already slugged)
pub async fn find_by_handle(pool: &PgPool, handle: &str) -> Result<Option<User>, StoreError> {
    let row = sqlx::query_as::<_, UserRow>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE handle = $1"
    ))
    .bind(handle)
    .fetch_optional(pool)
    .await?;

    row.map(User::try_from).transpose().map_err(StoreError::from)
}

/// Get user by ID
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, StoreError> {
    let row = sqlx::query_as::<_, UserRow>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(User::try_from).transpose().map_err(StoreError::from)
}

/// Overwrite a user's handle, description, and links.
///
/// The links are encoded to their stored JSON form here. Last write wins;
/// there is no concurrency token.
pub async fn update_profile(
    pool: &PgPool,
    id: Uuid,
    handle: &str,
    description: &str,
    links: &[SocialLink],
) -> Result<(), StoreError> {
    let encoded = serde_json::to_string(links)?;
    let now = Utc::now();

    sqlx::query(
        r#"
        UPDATE users
        SET handle = $1, description = $2, links = $3, updated_at = $4
        WHERE id = $5
        "#,
    )
    .bind(handle)
    .bind(description)
    .bind(&encoded)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Set a user's avatar URL after a successful upload.
pub async fn update_image(pool: &PgPool, id: Uuid, image: &str) -> Result<(), StoreError> {
    let now = Utc::now();

    sqlx::query("UPDATE users SET image = $1, updated_at = $2 WHERE id = $3")
        .bind(image)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
