//! Telemetry row type shared by the loaders and the aggregator.

use chrono::{DateTime, Utc};
use routeviz_geo::Coordinate;
use serde::{Deserialize, Serialize};

/// One GPS telemetry sample.
///
/// Rows are plain values, expected in capture order. Altitude is in
/// meters; speed is carried through in whatever unit the recorder used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRow {
    /// Capture time of the sample.
    pub time: DateTime<Utc>,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Altitude in meters.
    pub altitude: f64,
    /// Speed in the recorder's unit.
    pub speed: f64,
}

impl TelemetryRow {
    /// The position of this sample as a coordinate.
    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_accessor() {
        let row = TelemetryRow {
            time: DateTime::from_timestamp(0, 0).unwrap(),
            latitude: 53.387135,
            longitude: -1.464492,
            altitude: 98.0,
            speed: 12.4,
        };
        assert_eq!(row.coordinate(), Coordinate::new(53.387135, -1.464492));
    }
}
