//! Session lifecycle orchestration.

pub mod service;

pub use service::{AuthSession, RegisterRequest, SessionService};
