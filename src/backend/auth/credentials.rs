/**
 * Password Hashing and Verification
 *
 * One-way credential handling on top of bcrypt. Hashing is salted and
 * deliberately expensive (DEFAULT_COST); verification is a constant-time
 * comparison that returns false for a merely-wrong password and errors only
 * when the stored hash itself is malformed.
 */

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hash a plaintext password for storage.
pub fn hash_password(plaintext: &str) -> Result<String, BcryptError> {
    hash(plaintext, DEFAULT_COST)
}

/// Check a plaintext password against a stored hash.
///
/// Returns `Ok(false)` on mismatch; an `Err` means the stored hash could not
/// be parsed, not that the password was wrong.
pub fn verify_password(plaintext: &str, password_hash: &str) -> Result<bool, BcryptError> {
    verify(plaintext, password_hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hashed = hash_password("password123").unwrap();
        assert_ne!(hashed, "password123");
        assert!(verify_password("password123", &hashed).unwrap());
    }

    #[test]
    fn test_wrong_password_is_false_not_error() {
        let hashed = hash_password("password123").unwrap();
        assert!(!verify_password("wrongpassword", &hashed).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("password123").unwrap();
        let second = hash_password("password123").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_errors() {
        assert!(verify_password("password123", "not-a-bcrypt-hash").is_err());
    }
}
