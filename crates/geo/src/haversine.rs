//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two points
//! on a sphere given their longitudes and latitudes.

use crate::Coordinate;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculates the great-circle distance between two coordinates in kilometers.
///
/// Uses the Haversine formula with the `atan2` arc step, which stays
/// numerically stable for antipodal and near-identical points.
///
/// # Arguments
/// * `from` - Starting coordinate
/// * `to` - Ending coordinate
///
/// # Returns
/// Distance in kilometers
///
/// # Example
/// ```
/// use routeviz_geo::{distance_km, Coordinate};
///
/// let london = Coordinate::new(51.507351, -0.127758);
/// let sheffield = Coordinate::new(53.381129, -1.470085);
///
/// let distance = distance_km(&london, &sheffield);
/// assert!((distance - 227.34).abs() < 0.01);
/// ```
#[inline]
pub fn distance_km(from: &Coordinate, to: &Coordinate) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let sum = haversine(lat2 - lat1) + lat1.cos() * lat2.cos() * haversine(lon2 - lon1);

    // Float error can push the sum a few ulps past 1 for antipodal points,
    // which would turn sqrt(1 - h) into NaN. The comparison is false for
    // NaN, so non-finite inputs still propagate.
    let h = if sum > 1.0 { 1.0 } else { sum };

    let arc = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * arc
}

/// The haversine of an angle in radians: `sin^2(angle / 2)`.
#[inline]
fn haversine(angle: f64) -> f64 {
    (angle / 2.0).sin().powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test data: points from recorded drives around Dresden and the UK
    const DRESDEN_A: Coordinate = Coordinate { latitude: 51.044935, longitude: 13.777610 };
    const DRESDEN_B: Coordinate = Coordinate { latitude: 51.050122, longitude: 13.775076 };
    const LONDON: Coordinate = Coordinate { latitude: 51.507351, longitude: -0.127758 };
    const SHEFFIELD: Coordinate = Coordinate { latitude: 53.381129, longitude: -1.470085 };

    #[test]
    fn test_origin_to_origin() {
        let origin = Coordinate::new(0.0, 0.0);
        assert_eq!(format!("{:.2}", distance_km(&origin, &origin)), "0.00");
    }

    #[test]
    fn test_short_hop_across_dresden() {
        let distance = distance_km(&DRESDEN_A, &DRESDEN_B);
        assert_eq!(format!("{:.2}", distance), "0.60");
    }

    #[test]
    fn test_london_to_sheffield() {
        let distance = distance_km(&LONDON, &SHEFFIELD);
        assert_eq!(format!("{:.2}", distance), "227.34");
    }

    #[test]
    fn test_same_point_zero_distance() {
        assert_eq!(distance_km(&SHEFFIELD, &SHEFFIELD), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let d1 = distance_km(&LONDON, &SHEFFIELD);
        let d2 = distance_km(&SHEFFIELD, &LONDON);
        assert!((d1 - d2).abs() < 1e-9);
    }

    #[test]
    fn test_antipodal_points_near_half_circumference() {
        let north = Coordinate::new(90.0, 0.0);
        let south = Coordinate::new(-90.0, 0.0);
        let half_circumference = EARTH_RADIUS_KM * std::f64::consts::PI;
        assert!((distance_km(&north, &south) - half_circumference).abs() < 0.001);
    }

    #[test]
    fn test_off_axis_antipodes_stay_finite() {
        // These antipodes accumulate h a few ulps above 1.
        let a = Coordinate::new(45.0, 0.0);
        let b = Coordinate::new(-45.0, 180.0);
        let half_circumference = EARTH_RADIUS_KM * std::f64::consts::PI;
        assert!((distance_km(&a, &b) - half_circumference).abs() < 0.001);
    }

    #[test]
    fn test_non_finite_input_propagates_as_nan() {
        let origin = Coordinate::new(0.0, 0.0);
        assert!(distance_km(&Coordinate::new(f64::NAN, 0.0), &origin).is_nan());
        assert!(distance_km(&Coordinate::new(f64::INFINITY, 0.0), &origin).is_nan());
        assert!(distance_km(&origin, &Coordinate::new(0.0, f64::NEG_INFINITY)).is_nan());
    }
}

/// Property-based tests for the distance function.
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Distance is symmetric in its arguments.
        #[test]
        fn distance_is_symmetric(
            lat_a in -90.0f64..=90.0,
            lon_a in -180.0f64..=180.0,
            lat_b in -90.0f64..=90.0,
            lon_b in -180.0f64..=180.0,
        ) {
            let a = Coordinate::new(lat_a, lon_a);
            let b = Coordinate::new(lat_b, lon_b);
            prop_assert!((distance_km(&a, &b) - distance_km(&b, &a)).abs() < 1e-9);
        }

        /// Distance is non-negative and never exceeds half the Earth's circumference.
        #[test]
        fn distance_is_bounded(
            lat_a in -90.0f64..=90.0,
            lon_a in -180.0f64..=180.0,
            lat_b in -90.0f64..=90.0,
            lon_b in -180.0f64..=180.0,
        ) {
            let d = distance_km(&Coordinate::new(lat_a, lon_a), &Coordinate::new(lat_b, lon_b));
            prop_assert!(d >= 0.0);
            prop_assert!(d <= EARTH_RADIUS_KM * std::f64::consts::PI + 1e-6);
        }

        /// The distance from any point to itself is exactly zero.
        #[test]
        fn distance_to_self_is_zero(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            let point = Coordinate::new(lat, lon);
            prop_assert_eq!(distance_km(&point, &point), 0.0);
        }
    }
}
