//! # hobbylink-api
//!
//! HTTP API layer for HobbyLink built on Axum.
//!
//! Provides the auth endpoints, nearby-user search, middleware (CORS,
//! tracing), the bearer-token extractor, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use error::ApiError;
pub use state::AppState;
