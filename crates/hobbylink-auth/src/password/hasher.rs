//! Argon2id password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use hobbylink_core::error::AppError;

/// Handles password hashing and verification using Argon2id.
///
/// Hash records use the PHC string format, so the salt and parameters
/// travel with the hash. Mismatch comparison is constant-time inside the
/// `argon2` crate.
#[derive(Debug, Clone)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password using Argon2id with a random salt.
    ///
    /// Accepts arbitrary UTF-8; length limits are enforced upstream by
    /// [`super::PasswordValidator`], never by truncation here.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored Argon2id hash.
    ///
    /// Returns `false` for a mismatch **and** for a malformed hash record;
    /// a corrupt stored hash must fail login, not crash it.
    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trips() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("Password1!").unwrap();
        assert!(hasher.verify_password("Password1!", &hash));
        assert!(!hasher.verify_password("Password2!", &hash));
    }

    #[test]
    fn hashing_is_salted() {
        let hasher = PasswordHasher::new();
        let a = hasher.hash_password("Password1!").unwrap();
        let b = hasher.hash_password("Password1!").unwrap();
        assert_ne!(a, b);
        assert!(hasher.verify_password("Password1!", &a));
        assert!(hasher.verify_password("Password1!", &b));
    }

    #[test]
    fn malformed_hash_record_verifies_false() {
        let hasher = PasswordHasher::new();
        assert!(!hasher.verify_password("Password1!", "not-a-phc-string"));
        assert!(!hasher.verify_password("Password1!", ""));
    }

    #[test]
    fn long_utf8_passwords_are_supported() {
        // Well past the 72-byte bcrypt-class limit.
        let hasher = PasswordHasher::new();
        let password = "pässwörd-".repeat(12);
        assert!(password.len() > 72);
        let hash = hasher.hash_password(&password).unwrap();
        assert!(hasher.verify_password(&password, &hash));
    }
}
