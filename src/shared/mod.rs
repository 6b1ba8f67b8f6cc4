//! Shared Module
//!
//! This module contains types and logic shared between the server and any
//! client of the API. All types are designed for serialization and
//! transmission over HTTP.
//!
//! # Overview
//!
//! The shared module provides:
//! - The social link record and the ordered link list (`LinkBoard`) with its
//!   toggle/reorder/serialize operations
//! - Handle normalization used on every path a handle enters the system

/// Social link list and ordering logic
pub mod links;

/// Handle normalization
pub mod handle;

/// Re-export commonly used types for convenience
pub use handle::slugify;
pub use links::{is_absolute_url, LinkBoard, LinkError, SocialLink, SOCIAL_CATALOG};
