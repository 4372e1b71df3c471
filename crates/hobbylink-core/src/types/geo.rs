//! Geographic coordinate value type.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
///
/// Both components are required together: a record that carries only one
/// of them has no usable position, so construction from optional parts
/// yields `None` unless both are present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees, positive north.
    pub latitude: f64,
    /// Longitude in decimal degrees, positive east.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from explicit components.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Builds a coordinate only when both components are present.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Some(Self {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_requires_both_components() {
        assert!(Coordinate::from_parts(Some(52.0), Some(13.4)).is_some());
        assert!(Coordinate::from_parts(Some(52.0), None).is_none());
        assert!(Coordinate::from_parts(None, Some(13.4)).is_none());
        assert!(Coordinate::from_parts(None, None).is_none());
    }
}
