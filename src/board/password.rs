//! Delete-password hashing and verification for corkboard.
//!
//! Uses Argon2id. Thread and reply delete passwords are stored as PHC hash
//! strings; the cleartext only exists in the request that carries it.

use argon2::{
    password_hash::{Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;

use crate::{CorkboardError, Result};

/// Hash a delete password using Argon2id.
///
/// Returns a PHC-formatted hash string that includes the salt and parameters.
/// Uses the argon2 crate's default cost profile; delete passwords are shared
/// per-item tokens, not account credentials.
///
/// # Examples
///
/// ```
/// use corkboard::board::password::hash_password;
///
/// let hash = hash_password("1234").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| CorkboardError::Password(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verify a delete password against a stored hash.
///
/// Returns `Ok(false)` on a mismatch; a mismatch is a normal outcome, not an
/// error. An undecodable stored hash is an error.
///
/// # Examples
///
/// ```
/// use corkboard::board::password::{hash_password, verify_password};
///
/// let hash = hash_password("1234").unwrap();
/// assert!(verify_password("1234", &hash).unwrap());
/// assert!(!verify_password("wrong", &hash).unwrap());
/// ```
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| CorkboardError::Password(format!("invalid stored hash: {e}")))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(e) => Err(CorkboardError::Password(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_success() {
        let hash = hash_password("test_password_123").unwrap();

        // Should be a valid PHC string
        assert!(hash.starts_with("$argon2id$"));
        assert!(hash.contains("$v=19$")); // Version 0x13 = 19
    }

    #[test]
    fn test_hash_password_different_hashes() {
        let password = "same_password";
        let hash1 = hash_password(password).unwrap();
        let hash2 = hash_password(password).unwrap();

        // Same password should produce different hashes (different salts)
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_password_correct() {
        let password = "correct_password";
        let hash = hash_password(password).unwrap();

        assert!(verify_password(password, &hash).unwrap());
    }

    #[test]
    fn test_verify_password_wrong() {
        let hash = hash_password("correct_password").unwrap();

        assert!(!verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_verify_password_invalid_hash() {
        let result = verify_password("any_password", "not_a_valid_hash");

        assert!(result.is_err());
        assert!(matches!(result, Err(CorkboardError::Password(_))));
    }

    #[test]
    fn test_short_password_allowed() {
        // Callers commonly use short tokens like "1234"
        let hash = hash_password("1234").unwrap();
        assert!(verify_password("1234", &hash).unwrap());
    }

    #[test]
    fn test_password_with_unicode() {
        let password = "パスワード123";
        let hash = hash_password(password).unwrap();
        assert!(verify_password(password, &hash).unwrap());
    }

    #[test]
    fn test_password_with_special_chars() {
        let password = "p@$$w0rd!#$%^&*()";
        let hash = hash_password(password).unwrap();
        assert!(verify_password(password, &hash).unwrap());
    }
}
