//! Hobby catalog repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use hobbylink_core::error::{AppError, ErrorKind};
use hobbylink_core::result::AppResult;
use hobbylink_entity::hobby::Hobby;

use crate::store::HobbyCatalog;

/// sqlx-backed read access to the hobby catalog.
#[derive(Debug, Clone)]
pub struct HobbyRepository {
    pool: PgPool,
}

impl HobbyRepository {
    /// Create a new hobby repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HobbyCatalog for HobbyRepository {
    async fn list(&self) -> AppResult<Vec<Hobby>> {
        sqlx::query_as::<_, Hobby>("SELECT * FROM hobbies ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list hobbies", e))
    }
}
