//! Session token claims.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hobbylink_entity::user::User;

/// Identity claims embedded in every session token.
///
/// Claims are a snapshot taken at issuance: if the account's email or
/// names change afterwards, already-issued tokens keep the old values
/// until the holder re-authenticates. Callers must not treat these as
/// live profile data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub sub: Uuid,
    /// Username at the time of issuance.
    pub username: String,
    /// Email at the time of issuance.
    pub email: String,
    /// First name at the time of issuance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name at the time of issuance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Builds a claims snapshot for a user, valid from `now` until
    /// `expires_at`.
    pub fn snapshot(user: &User, now: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: Some(user.first_name.clone()),
            last_name: Some(user.last_name.clone()),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}
