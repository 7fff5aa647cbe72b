//! Password hashing using Argon2id
//!
//! Passwords are stored as PHC strings (`$argon2id$v=19$...`), which carry
//! their own salt and parameters.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{SipadiError, SipadiResult};

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> SipadiResult<String> {
    if password.is_empty() {
        return Err(SipadiError::Validation("Password cannot be empty".into()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| SipadiError::Storage(format!("Password hashing failed: {}", e)))?;

    Ok(hash.to_string())
}

/// Check a password against a stored PHC string
///
/// Returns `Ok(false)` for a wrong password and an error only when the stored
/// hash itself cannot be read.
pub fn verify_password(password: &str, stored: &str) -> SipadiResult<bool> {
    let parsed = PasswordHash::new(stored)
        .map_err(|e| SipadiError::Storage(format!("Stored password hash is invalid: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("padi-subur").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("padi-subur", &hash).unwrap());
        assert!(!verify_password("padi-gagal", &hash).unwrap());
    }

    #[test]
    fn test_same_password_different_salt() {
        let a = hash_password("rahasia").unwrap();
        let b = hash_password("rahasia").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_password_rejected() {
        assert!(hash_password("").unwrap_err().is_validation());
    }

    #[test]
    fn test_corrupt_hash_is_error() {
        assert!(verify_password("x", "not-a-phc-string").is_err());
    }
}
