//! Session token verification.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use hobbylink_core::config::auth::AuthConfig;
use hobbylink_core::error::{AppError, ErrorKind};

use super::claims::Claims;

/// Validates session tokens.
///
/// Rejection is uniform: an expired token, a bad signature, and a
/// malformed token all produce the same error, so callers cannot use the
/// verify step as an oracle for why a token was refused.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a session token, returning its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| {
                AppError::new(
                    ErrorKind::InvalidCredentials,
                    "Invalid or expired session token",
                )
            })
    }
}
