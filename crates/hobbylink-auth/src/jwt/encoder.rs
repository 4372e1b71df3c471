//! Session token creation with configurable signing and TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use hobbylink_core::config::auth::AuthConfig;
use hobbylink_core::error::AppError;
use hobbylink_entity::user::User;

use super::claims::Claims;

/// A freshly issued, signed session token together with its expiry.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SessionToken {
    /// The signed bearer token.
    pub token: String,
    /// When the token stops being valid.
    pub expires_at: DateTime<Utc>,
}

/// Creates signed session tokens.
///
/// The signing key is loaded once from configuration at construction and
/// never changes afterwards. Every token carries a fixed validity window
/// from its issuance instant; there is no sliding renewal.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in days.
    ttl_days: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_days", &self.ttl_days)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_days: config.token_ttl_days as i64,
        }
    }

    /// Issues a session token snapshotting the user's identity claims.
    pub fn issue(&self, user: &User) -> Result<SessionToken, AppError> {
        let now = Utc::now();
        let expires_at = now + Duration::days(self.ttl_days);
        self.issue_claims(Claims::snapshot(user, now, expires_at))
    }

    /// Signs a prebuilt claims payload. Split out so tests can issue
    /// already-expired tokens.
    pub(crate) fn issue_claims(&self, claims: Claims) -> Result<SessionToken, AppError> {
        let expires_at = claims.expires_at();
        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        Ok(SessionToken { token, expires_at })
    }
}
