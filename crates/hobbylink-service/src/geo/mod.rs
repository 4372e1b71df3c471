//! Geospatial proximity evaluation.

pub mod proximity;

pub use proximity::{distance_km, filter_within_radius};
