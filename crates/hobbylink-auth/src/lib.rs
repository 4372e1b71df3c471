//! # hobbylink-auth
//!
//! Credential primitives for the HobbyLink session core.
//!
//! ## Modules
//!
//! - `jwt` — session token claims, issuance, and verification
//! - `password` — Argon2id password hashing and length policy

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, SessionToken};
pub use password::{PasswordHasher, PasswordValidator};
