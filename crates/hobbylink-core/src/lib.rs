//! # hobbylink-core
//!
//! Core crate for HobbyLink. Contains configuration schemas, shared value
//! types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other HobbyLink crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
