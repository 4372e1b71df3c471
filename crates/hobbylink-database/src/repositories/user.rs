//! User repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use hobbylink_core::error::{AppError, ErrorKind};
use hobbylink_core::result::AppResult;
use hobbylink_entity::hobby::Hobby;
use hobbylink_entity::user::{NewUser, User};

use crate::store::UserStore;

/// sqlx-backed credential store.
///
/// Uniqueness of username and email is ultimately enforced by the unique
/// indexes on `LOWER(username)` / `LOWER(email)`; the conflict mapping in
/// [`UserStore::create_with_hobbies`] catches registrations that race past
/// the service-level pre-checks.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(username) = LOWER($1)")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
            })
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    async fn find_by_identifier(&self, identifier: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE LOWER(username) = LOWER($1) OR LOWER(email) = LOWER($1)",
        )
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find user by identifier", e)
        })
    }

    async fn create_with_hobbies(&self, data: &NewUser, hobby_ids: &[Uuid]) -> AppResult<User> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password_hash, first_name, last_name, \
                                phone_number, date_of_birth, profile_image_url, \
                                is_active, join_date, last_login_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, TRUE, NOW(), NOW()) \
             RETURNING *",
        )
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.phone_number)
        .bind(data.date_of_birth)
        .bind(&data.profile_image_url)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_username_lower_key") =>
            {
                AppError::duplicate_username()
            }
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_email_lower_key") =>
            {
                AppError::duplicate_email()
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })?;

        // Attach only hobby ids that exist in the catalog; unknown ids
        // drop out of the ANY() match instead of failing the registration.
        if !hobby_ids.is_empty() {
            sqlx::query(
                "INSERT INTO user_hobbies (user_id, hobby_id) \
                 SELECT $1, id FROM hobbies WHERE id = ANY($2) \
                 ON CONFLICT DO NOTHING",
            )
            .bind(user.id)
            .bind(hobby_ids)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to attach hobbies", e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit registration", e)
        })?;

        Ok(user)
    }

    async fn touch_last_login(&self, user_id: Uuid) -> AppResult<DateTime<Utc>> {
        // GREATEST keeps the timestamp monotonic even under clock skew
        // between pool connections.
        sqlx::query_scalar::<_, DateTime<Utc>>(
            "UPDATE users \
             SET last_login_at = GREATEST(COALESCE(last_login_at, NOW()), NOW()) \
             WHERE id = $1 RETURNING last_login_at",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update last login", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }

    async fn hobbies_of(&self, user_id: Uuid) -> AppResult<Vec<Hobby>> {
        sqlx::query_as::<_, Hobby>(
            "SELECT h.* FROM hobbies h \
             JOIN user_hobbies uh ON uh.hobby_id = h.id \
             WHERE uh.user_id = $1 \
             ORDER BY h.name ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list user hobbies", e))
    }

    async fn find_located(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>(
            "SELECT * FROM users \
             WHERE is_active = TRUE AND latitude IS NOT NULL AND longitude IS NOT NULL \
             ORDER BY join_date ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list located users", e))
    }
}
