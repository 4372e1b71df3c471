//! Password length policy for new passwords.

use hobbylink_core::config::auth::AuthConfig;
use hobbylink_core::error::AppError;

/// Validates passwords against the configured length policy.
///
/// Argon2id has no bcrypt-style 72-byte cap, so the upper bound here is a
/// sanity limit: anything longer is rejected outright rather than
/// truncated.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length in characters.
    min_length: usize,
    /// Maximum password length in bytes.
    max_bytes: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
            max_bytes: config.password_max_bytes,
        }
    }

    /// Validates a password against the configured policy.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        if password.len() > self.max_bytes {
            return Err(AppError::validation(format!(
                "Password must not exceed {} bytes",
                self.max_bytes
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hobbylink_core::error::ErrorKind;

    fn validator() -> PasswordValidator {
        PasswordValidator::new(&AuthConfig::default())
    }

    #[test]
    fn accepts_reasonable_passwords() {
        assert!(validator().validate("Password1!").is_ok());
    }

    #[test]
    fn rejects_short_passwords() {
        let err = validator().validate("short").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn rejects_oversized_passwords_instead_of_truncating() {
        let err = validator().validate(&"x".repeat(2048)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
