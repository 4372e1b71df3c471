//! Hobby catalog model.
//!
//! The hobby catalog itself is owned elsewhere in the platform; the
//! session core only reads it to attach registrations to existing hobbies
//! and to echo a user's hobby list in responses.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A hobby from the platform catalog.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Hobby {
    /// Unique hobby identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Catalog category (optional).
    pub category: Option<String>,
}
