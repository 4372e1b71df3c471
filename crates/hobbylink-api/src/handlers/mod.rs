//! HTTP request handlers.

pub mod auth;
pub mod health;
pub mod hobby;
pub mod user;
