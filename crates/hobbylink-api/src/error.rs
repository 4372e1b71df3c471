//! Maps domain `AppError` to HTTP responses.
//!
//! `ApiError` is the crate-local wrapper that carries an `AppError`
//! across the Axum boundary; handlers return `Result<_, ApiError>` and
//! the `?` operator converts domain errors via `From`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use hobbylink_core::error::{AppError, ErrorKind};

/// HTTP-facing wrapper around the domain error.
#[derive(Debug)]
pub struct ApiError(AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, expose_message) = match err.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, true),
            ErrorKind::InvalidCredentials => (StatusCode::UNAUTHORIZED, true),
            ErrorKind::AccountDeactivated => (StatusCode::FORBIDDEN, true),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, true),
            ErrorKind::DuplicateEmail | ErrorKind::DuplicateUsername => {
                (StatusCode::CONFLICT, true)
            }
            ErrorKind::NotImplemented => (StatusCode::NOT_IMPLEMENTED, true),
            ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => {
                // Storage and infrastructure detail stays in server logs;
                // the caller only sees a fixed generic body.
                tracing::error!(error = %err, "Request failed with internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, false)
            }
        };

        let message = if expose_message {
            err.message
        } else {
            "An internal error occurred".to_string()
        };

        let body = ApiErrorResponse {
            error: err.kind.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_for(err: AppError) -> Response {
        ApiError::from(err).into_response()
    }

    #[test]
    fn business_failures_map_to_distinct_statuses() {
        let cases = [
            (AppError::duplicate_email(), StatusCode::CONFLICT),
            (AppError::duplicate_username(), StatusCode::CONFLICT),
            (AppError::invalid_credentials(), StatusCode::UNAUTHORIZED),
            (AppError::account_deactivated(), StatusCode::FORBIDDEN),
            (
                AppError::not_implemented("nope"),
                StatusCode::NOT_IMPLEMENTED,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(response_for(err).status(), expected);
        }
    }

    #[test]
    fn domain_errors_convert_through_question_mark() {
        fn fails() -> Result<(), ApiError> {
            Err(AppError::validation("bad input"))?;
            Ok(())
        }
        let response = fails().unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_detail_is_not_echoed_to_the_caller() {
        let err = AppError::database("SELECT * FROM users blew up");
        let response = response_for(err);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
