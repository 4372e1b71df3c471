//! Store traits forming the persistence seam of the session core.
//!
//! The credential store and hobby catalog are owned by the platform's
//! persistence layer; the session core only consumes them through these
//! traits. Production wires in the sqlx repositories from
//! [`crate::repositories`]; service-level tests substitute in-memory
//! implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use hobbylink_core::result::AppResult;
use hobbylink_entity::hobby::Hobby;
use hobbylink_entity::user::{NewUser, User};

/// Durable record system for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Find an account by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find an account by username (case-insensitive).
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Find an account by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find an account whose username **or** email matches the identifier
    /// (case-insensitive). At most one account can match since both
    /// columns are unique.
    async fn find_by_identifier(&self, identifier: &str) -> AppResult<Option<User>>;

    /// Create an account together with its hobby associations as one
    /// atomic unit. Hobby ids that do not exist in the catalog are
    /// silently skipped; a storage failure leaves no partial account.
    async fn create_with_hobbies(&self, data: &NewUser, hobby_ids: &[Uuid]) -> AppResult<User>;

    /// Advance the last-login timestamp and return the stored value.
    async fn touch_last_login(&self, user_id: Uuid) -> AppResult<DateTime<Utc>>;

    /// List the hobbies associated with an account.
    async fn hobbies_of(&self, user_id: Uuid) -> AppResult<Vec<Hobby>>;

    /// List active accounts that have a complete coordinate pair.
    async fn find_located(&self) -> AppResult<Vec<User>>;
}

/// Read-only access to the platform hobby catalog.
#[async_trait]
pub trait HobbyCatalog: Send + Sync + 'static {
    /// List the full catalog.
    async fn list(&self) -> AppResult<Vec<Hobby>>;
}
