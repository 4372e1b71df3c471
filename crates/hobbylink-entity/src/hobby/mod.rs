//! Hobby catalog entity.

pub mod model;

pub use model::Hobby;
