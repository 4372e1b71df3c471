//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
///
/// The JWT secret is read once at startup and held read-only for the
/// process lifetime; it is never logged or serialized into responses.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Session token validity window in days, fixed at issuance.
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: u64,
    /// Minimum password length in characters.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Maximum password length in bytes; longer inputs are rejected
    /// before hashing rather than silently truncated.
    #[serde(default = "default_password_max")]
    pub password_max_bytes: usize,
}

// The secret must never reach logs, even through a debug-printed config.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"****")
            .field("token_ttl_days", &self.token_ttl_days)
            .field("password_min_length", &self.password_min_length)
            .field("password_max_bytes", &self.password_max_bytes)
            .finish()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_days: default_token_ttl_days(),
            password_min_length: default_password_min(),
            password_max_bytes: default_password_max(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl_days() -> u64 {
    30
}

fn default_password_min() -> usize {
    8
}

fn default_password_max() -> usize {
    1024
}
