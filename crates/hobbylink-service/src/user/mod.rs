//! User profile and search services.

pub mod service;

pub use service::UserService;
