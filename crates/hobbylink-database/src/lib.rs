//! # hobbylink-database
//!
//! PostgreSQL connection management, the migration runner, the store
//! traits that form the persistence seam of the session core, and their
//! sqlx-backed repository implementations.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use store::{HobbyCatalog, UserStore};
