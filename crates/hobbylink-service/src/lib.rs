//! # hobbylink-service
//!
//! Business logic service layer for HobbyLink. Each service orchestrates
//! the credential store, hashing, and token issuance to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod geo;
pub mod session;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

pub use session::{AuthSession, SessionService};
pub use user::UserService;
