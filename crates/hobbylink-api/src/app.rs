//! Application builder — wires services + router + state into an Axum app.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use hobbylink_auth::jwt::{JwtDecoder, JwtEncoder};
use hobbylink_auth::password::{PasswordHasher, PasswordValidator};
use hobbylink_core::config::AppConfig;
use hobbylink_core::error::AppError;
use hobbylink_database::repositories::{HobbyRepository, UserRepository};
use hobbylink_database::store::{HobbyCatalog, UserStore};
use hobbylink_service::session::SessionService;
use hobbylink_service::user::UserService;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the application state from configuration and a connected pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    let user_repo: Arc<dyn UserStore> = Arc::new(UserRepository::new(db_pool.clone()));
    let hobby_catalog: Arc<dyn HobbyCatalog> = Arc::new(HobbyRepository::new(db_pool.clone()));

    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    let session_service = Arc::new(SessionService::new(
        Arc::clone(&user_repo),
        password_hasher,
        password_validator,
        jwt_encoder,
    ));
    let user_service = Arc::new(UserService::new(Arc::clone(&user_repo)));

    AppState {
        config: Arc::new(config),
        db_pool,
        jwt_decoder,
        session_service,
        user_service,
        hobby_catalog,
    }
}

/// Builds the complete Axum application.
pub fn build_app(config: AppConfig, db_pool: PgPool) -> Router {
    build_router(build_state(config, db_pool))
}

/// Runs the HobbyLink server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = build_app(config, db_pool);

    tracing::info!(%addr, "HobbyLink API listening");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Server shut down cleanly");
    Ok(())
}

/// Resolves when the process receives Ctrl-C / SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
