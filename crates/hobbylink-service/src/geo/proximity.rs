//! Great-circle distance and radius filtering.
//!
//! Pure and stateless; safe to call concurrently. A linear scan is the
//! documented implementation at platform scale — a spatial index would be
//! an internal optimization and must not change the inclusive, symmetric,
//! order-preserving contract.

use hobbylink_core::types::Coordinate;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle (haversine) distance between two coordinates in km.
///
/// Symmetric in its arguments and zero exactly when both points coincide.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Keeps every item whose coordinate lies within `radius_km` of `center`,
/// inclusive.
///
/// Input order is preserved. Items for which `coordinate_of` yields no
/// coordinate (an incomplete latitude/longitude pair) are excluded. A
/// non-positive radius keeps only points coincident with the center, or
/// nothing at all for a negative radius.
pub fn filter_within_radius<T, F>(
    items: Vec<T>,
    center: Coordinate,
    radius_km: f64,
    coordinate_of: F,
) -> Vec<T>
where
    F: Fn(&T) -> Option<Coordinate>,
{
    items
        .into_iter()
        .filter(|item| {
            coordinate_of(item)
                .map(|coord| distance_km(coord, center) <= radius_km)
                .unwrap_or(false)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BERLIN: Coordinate = Coordinate {
        latitude: 52.52,
        longitude: 13.405,
    };
    const PARIS: Coordinate = Coordinate {
        latitude: 48.8566,
        longitude: 2.3522,
    };
    const POTSDAM: Coordinate = Coordinate {
        latitude: 52.3906,
        longitude: 13.0645,
    };

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(distance_km(BERLIN, BERLIN), 0.0);
        assert_eq!(distance_km(PARIS, PARIS), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(distance_km(BERLIN, PARIS), distance_km(PARIS, BERLIN));
        assert_eq!(distance_km(BERLIN, POTSDAM), distance_km(POTSDAM, BERLIN));
    }

    #[test]
    fn known_distances_are_close() {
        // Berlin–Paris is about 878 km great-circle.
        let d = distance_km(BERLIN, PARIS);
        assert!((d - 878.0).abs() < 5.0, "got {d}");

        // Berlin–Potsdam is about 27 km.
        let d = distance_km(BERLIN, POTSDAM);
        assert!((d - 27.0).abs() < 2.0, "got {d}");
    }

    #[test]
    fn filter_is_inclusive_and_order_preserving() {
        let items = vec![("potsdam", POTSDAM), ("paris", PARIS), ("berlin", BERLIN)];
        let within = filter_within_radius(items, BERLIN, 30.0, |(_, c)| Some(*c));
        let names: Vec<_> = within.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["potsdam", "berlin"]);
    }

    #[test]
    fn boundary_distance_is_included() {
        let d = distance_km(BERLIN, POTSDAM);
        let items = vec![POTSDAM];
        assert_eq!(
            filter_within_radius(items.clone(), BERLIN, d, |c| Some(*c)).len(),
            1
        );
        assert!(filter_within_radius(items, BERLIN, d - 0.001, |c| Some(*c)).is_empty());
    }

    #[test]
    fn zero_radius_keeps_only_coincident_points() {
        let items = vec![BERLIN, PARIS, BERLIN];
        let within = filter_within_radius(items, BERLIN, 0.0, |c| Some(*c));
        assert_eq!(within, vec![BERLIN, BERLIN]);
    }

    #[test]
    fn negative_radius_yields_nothing() {
        let items = vec![BERLIN, PARIS];
        assert!(filter_within_radius(items, BERLIN, -1.0, |c| Some(*c)).is_empty());
    }

    #[test]
    fn items_without_coordinates_are_excluded() {
        let items = vec![Some(BERLIN), None, Some(PARIS)];
        let within = filter_within_radius(items, BERLIN, 10_000.0, |c| *c);
        assert_eq!(within.len(), 2);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let items: Vec<Coordinate> = Vec::new();
        assert!(filter_within_radius(items, BERLIN, 100.0, |c| Some(*c)).is_empty());
    }
}
