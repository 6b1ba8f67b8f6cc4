//! Handle normalization
//!
//! Handles are the public profile slugs. Every handle that enters the system
//! (registration, profile update, availability search) is normalized the same
//! way before any uniqueness check, so `"My Handle!"` and `"my-handle"`
//! collide on the same stored value.

/// Normalize a raw handle into its stored slug form.
///
/// Lowercases and keeps ASCII alphanumerics only; everything else (spaces,
/// punctuation, separators) is removed. May return an empty string, which
/// callers must reject as a validation failure.
pub fn slugify(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_lowercases_and_strips() {
        assert_eq!(slugify("My Handle!"), "myhandle");
        assert_eq!(slugify("my-handle"), "myhandle");
        assert_eq!(slugify("  Octocat_99  "), "octocat99");
    }

    #[test]
    fn test_slugify_collisions() {
        // Different spellings that must land on the same stored handle
        assert_eq!(slugify("My Handle!"), slugify("my-handle"));
    }

    #[test]
    fn test_slugify_can_produce_empty() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("   "), "");
    }
}
