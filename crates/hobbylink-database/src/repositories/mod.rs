//! Repository implementations.

pub mod hobby;
pub mod user;

pub use hobby::HobbyRepository;
pub use user::UserRepository;
