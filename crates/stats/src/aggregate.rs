//! Single-pass aggregate statistics over a telemetry row sequence.

use routeviz_geo::Coordinate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};
use crate::row::TelemetryRow;

/// Summary statistics derived from one pass over a route.
///
/// A computed snapshot: built once per [`aggregate`] call and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsResult {
    /// Sum of consecutive great-circle segment lengths, in meters.
    pub distance_travelled_meters: f64,
    /// Largest observed speed, in the input's unit.
    pub fastest_speed: f64,
    /// Arithmetic mean of observed speeds, in the input's unit.
    pub average_speed: f64,
    /// Position of the sample with the highest altitude.
    pub highest_point: Coordinate,
    /// Largest observed altitude, in meters.
    pub max_altitude: f64,
    /// Arithmetic mean of observed altitudes, in meters.
    pub average_altitude: f64,
    /// Midpoint of the bounding box of observed positions.
    pub central_point: Coordinate,
}

/// Computes route statistics in a single ordered pass.
///
/// Distance accumulates between consecutive rows, so row order matters;
/// a one-row sequence travels zero meters. Extrema use strict
/// comparisons, keeping the first-seen maximum on ties, and the highest
/// point is captured as a fresh coordinate each time the maximum moves.
///
/// # Arguments
/// * `rows` - Telemetry samples in capture order
///
/// # Errors
/// Returns [`StatsError::EmptyInput`] when `rows` is empty.
///
/// # Example
/// ```
/// use chrono::DateTime;
/// use routeviz_stats::{aggregate, TelemetryRow};
///
/// let rows = vec![
///     TelemetryRow {
///         time: DateTime::from_timestamp(0, 0).unwrap(),
///         latitude: 51.044935,
///         longitude: 13.777610,
///         altitude: 112.0,
///         speed: 18.2,
///     },
///     TelemetryRow {
///         time: DateTime::from_timestamp(30, 0).unwrap(),
///         latitude: 51.050122,
///         longitude: 13.775076,
///         altitude: 116.5,
///         speed: 21.6,
///     },
/// ];
///
/// let stats = aggregate(&rows).unwrap();
/// assert_eq!(format!("{:.1}", stats.distance_travelled_meters), "603.4");
/// assert_eq!(stats.fastest_speed, 21.6);
/// ```
pub fn aggregate(rows: &[TelemetryRow]) -> Result<StatsResult> {
    if rows.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut total_distance_km = 0.0;
    let mut fastest_speed = 0.0f64;
    let mut sum_speed = 0.0;
    let mut max_altitude = f64::NEG_INFINITY;
    let mut sum_altitude = 0.0;
    let mut min_lat = f64::INFINITY;
    let mut max_lat = f64::NEG_INFINITY;
    let mut min_lon = f64::INFINITY;
    let mut max_lon = f64::NEG_INFINITY;
    let mut highest_point: Option<Coordinate> = None;
    let mut previous: Option<Coordinate> = None;

    for row in rows {
        let position = row.coordinate();

        if let Some(previous) = previous {
            total_distance_km += previous.distance_in_km(&position);
        }

        if row.speed > fastest_speed {
            fastest_speed = row.speed;
        }
        sum_speed += row.speed;

        if row.altitude > max_altitude {
            max_altitude = row.altitude;
            highest_point = Some(position);
        }
        sum_altitude += row.altitude;

        min_lat = min_lat.min(row.latitude);
        max_lat = max_lat.max(row.latitude);
        min_lon = min_lon.min(row.longitude);
        max_lon = max_lon.max(row.longitude);

        previous = Some(position);
    }

    let count = rows.len() as f64;
    // A NaN altitude never wins a comparison; fall back to the first fix.
    let highest_point = highest_point.unwrap_or_else(|| rows[0].coordinate());

    Ok(StatsResult {
        distance_travelled_meters: total_distance_km * 1000.0,
        fastest_speed,
        average_speed: sum_speed / count,
        highest_point,
        max_altitude,
        average_altitude: sum_altitude / count,
        central_point: Coordinate::new((min_lat + max_lat) / 2.0, (min_lon + max_lon) / 2.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use routeviz_geo::distance_km;

    fn row(latitude: f64, longitude: f64, altitude: f64, speed: f64, seconds: i64) -> TelemetryRow {
        TelemetryRow {
            time: DateTime::from_timestamp(seconds, 0).expect("valid timestamp"),
            latitude,
            longitude,
            altitude,
            speed,
        }
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(aggregate(&[]), Err(StatsError::EmptyInput)));
    }

    #[test]
    fn test_single_row() {
        let rows = [row(53.387135, -1.464492, 98.0, 12.4, 0)];
        let stats = aggregate(&rows).unwrap();

        assert_eq!(stats.distance_travelled_meters, 0.0);
        assert_eq!(stats.fastest_speed, 12.4);
        assert_eq!(stats.average_speed, 12.4);
        assert_eq!(stats.highest_point, rows[0].coordinate());
        assert_eq!(stats.max_altitude, 98.0);
        assert_eq!(stats.average_altitude, 98.0);
        assert_eq!(stats.central_point, rows[0].coordinate());
    }

    #[test]
    fn test_distance_sums_consecutive_segments() {
        let rows = [
            row(51.044935, 13.777610, 110.0, 10.0, 0),
            row(51.050122, 13.775076, 112.0, 12.0, 30),
            row(51.044935, 13.777610, 111.0, 11.0, 60),
        ];
        let stats = aggregate(&rows).unwrap();

        let segment = distance_km(&rows[0].coordinate(), &rows[1].coordinate());
        let expected_meters = 2.0 * segment * 1000.0;
        assert!((stats.distance_travelled_meters - expected_meters).abs() < 1e-9);
        // Each hop across Dresden is roughly 600 m.
        assert!((stats.distance_travelled_meters - 1206.7).abs() < 1.0);
    }

    #[test]
    fn test_extrema_and_averages() {
        let rows = [
            row(51.0, 13.0, -30.0, 9.0, 0),
            row(51.1, 13.1, -5.0, 3.0, 10),
            row(51.2, 13.2, -12.0, 6.0, 20),
        ];
        let stats = aggregate(&rows).unwrap();

        assert_eq!(stats.fastest_speed, 9.0);
        assert_eq!(stats.average_speed, 6.0);
        // All-below-zero altitudes still pick the largest, not zero.
        assert_eq!(stats.max_altitude, -5.0);
        assert_eq!(stats.highest_point, Coordinate::new(51.1, 13.1));
        assert!((stats.average_altitude - (-47.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_altitude_ties_keep_first_seen_point() {
        let rows = [
            row(51.0, 13.0, 200.0, 1.0, 0),
            row(52.0, 14.0, 200.0, 1.0, 10),
            row(53.0, 15.0, 150.0, 1.0, 20),
        ];
        let stats = aggregate(&rows).unwrap();

        assert_eq!(stats.highest_point, Coordinate::new(51.0, 13.0));
        assert_eq!(stats.max_altitude, 200.0);
    }

    #[test]
    fn test_central_point_is_bounding_box_midpoint() {
        let rows = [
            row(0.0, 0.0, 10.0, 1.0, 0),
            row(10.0, 20.0, 20.0, 2.0, 10),
            row(4.0, 7.0, 30.0, 3.0, 20),
        ];
        let stats = aggregate(&rows).unwrap();

        assert_eq!(stats.central_point, Coordinate::new(5.0, 10.0));
    }

    #[test]
    fn test_aggregate_is_deterministic() {
        let rows = [
            row(51.507351, -0.127758, 20.0, 30.0, 0),
            row(53.381129, -1.470085, 140.0, 90.0, 9000),
        ];
        assert_eq!(aggregate(&rows).unwrap(), aggregate(&rows).unwrap());
    }
}
