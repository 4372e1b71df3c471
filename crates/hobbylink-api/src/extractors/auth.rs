//! `AuthUser` extractor — pulls the bearer token from the Authorization
//! header, verifies it, and injects the token claims.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use hobbylink_auth::jwt::Claims;
use hobbylink_core::error::{AppError, ErrorKind};

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user claims available in handlers.
///
/// Claims are the snapshot embedded in the token at issuance; profile
/// edits made after issuance are not reflected here.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Returns the inner claims.
    pub fn claims(&self) -> &Claims {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = Claims;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::new(ErrorKind::InvalidCredentials, "Missing Authorization header")
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::new(
                ErrorKind::InvalidCredentials,
                "Invalid Authorization header format",
            )
        })?;

        let claims = state.jwt_decoder.verify(token)?;

        Ok(AuthUser(claims))
    }
}
