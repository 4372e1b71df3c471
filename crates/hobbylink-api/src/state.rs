//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use hobbylink_auth::jwt::JwtDecoder;
use hobbylink_core::config::AppConfig;
use hobbylink_database::store::HobbyCatalog;
use hobbylink_service::session::SessionService;
use hobbylink_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Session token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Session lifecycle orchestration.
    pub session_service: Arc<SessionService>,
    /// User profile and search service.
    pub user_service: Arc<UserService>,
    /// Hobby catalog (read-only).
    pub hobby_catalog: Arc<dyn HobbyCatalog>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish()
    }
}
