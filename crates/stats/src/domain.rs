//! Axis domains for chart rendering.
//!
//! Line charts get simple padded ranges. The route map needs more care:
//! its two axes are balanced so a kilometer spans the same number of
//! pixels vertically and horizontally, which keeps the drawn route from
//! stretching.

use chrono::{DateTime, Utc};
use routeviz_geo::Coordinate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};
use crate::row::TelemetryRow;

/// The numeric range an axis must cover to display all data points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    /// Lower bound of the axis.
    pub min: f64,
    /// Upper bound of the axis.
    pub max: f64,
}

impl AxisDomain {
    /// Creates a domain from its bounds.
    #[inline]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the domain.
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Extends both ends by `fraction` of the current span.
    pub fn padded(&self, fraction: f64) -> Self {
        let buffer = fraction * self.span();
        Self::new(self.min - buffer, self.max + buffer)
    }

    /// Multiplies the span by `factor`, keeping the midpoint fixed.
    pub fn expanded(&self, factor: f64) -> Self {
        let buffer = (self.span() * factor - self.span()) / 2.0;
        Self::new(self.min - buffer, self.max + buffer)
    }
}

/// Paired latitude/longitude domains for the route map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteDomains {
    /// Vertical (latitude) axis domain.
    pub latitude: AxisDomain,
    /// Horizontal (longitude) axis domain.
    pub longitude: AxisDomain,
}

/// Calculates map domains so the scale on the x and y axis is roughly
/// the same in km (they can't be completely the same, because the earth
/// is not flat).
///
/// Both observed ranges are padded by 10% on each side, then measured in
/// kilometers through the route's mean position. Whichever axis covers
/// fewer kilometers per pixel of `inner_width`/`inner_height` has its
/// domain symmetrically expanded until both axes match. Axes with zero
/// physical extent are left unbalanced rather than expanded to infinity.
///
/// # Arguments
/// * `rows` - Telemetry samples
/// * `inner_width` - Plot area width in pixels, excluding margins
/// * `inner_height` - Plot area height in pixels, excluding margins
///
/// # Errors
/// Returns [`StatsError::EmptyInput`] when `rows` is empty.
pub fn route_domains(rows: &[TelemetryRow], inner_width: f64, inner_height: f64) -> Result<RouteDomains> {
    if rows.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut min_lat = f64::INFINITY;
    let mut max_lat = f64::NEG_INFINITY;
    let mut sum_lat = 0.0;
    let mut min_lon = f64::INFINITY;
    let mut max_lon = f64::NEG_INFINITY;
    let mut sum_lon = 0.0;

    for row in rows {
        min_lat = min_lat.min(row.latitude);
        max_lat = max_lat.max(row.latitude);
        sum_lat += row.latitude;
        min_lon = min_lon.min(row.longitude);
        max_lon = max_lon.max(row.longitude);
        sum_lon += row.longitude;
    }

    let count = rows.len() as f64;
    let avg_lat = sum_lat / count;
    let avg_lon = sum_lon / count;

    let latitude = AxisDomain::new(min_lat, max_lat).padded(0.10);
    let longitude = AxisDomain::new(min_lon, max_lon).padded(0.10);

    // Physical extent of each padded axis, measured through the mean position
    let bottom_center = Coordinate::new(latitude.min, avg_lon);
    let top_center = Coordinate::new(latitude.max, avg_lon);
    let middle_left = Coordinate::new(avg_lat, longitude.min);
    let middle_right = Coordinate::new(avg_lat, longitude.max);

    let latitude_distance = bottom_center.distance_in_km(&top_center);
    let longitude_distance = middle_left.distance_in_km(&middle_right);

    let y_scale = latitude_distance / inner_height;
    let x_scale = longitude_distance / inner_width;

    if x_scale > 0.0 && x_scale < y_scale {
        Ok(RouteDomains {
            latitude,
            longitude: longitude.expanded(y_scale / x_scale),
        })
    } else if y_scale > 0.0 && y_scale < x_scale {
        Ok(RouteDomains {
            latitude: latitude.expanded(x_scale / y_scale),
            longitude,
        })
    } else {
        Ok(RouteDomains { latitude, longitude })
    }
}

/// Vertical domain for the speed chart: zero up to 110% of the fastest speed.
///
/// # Errors
/// Returns [`StatsError::EmptyInput`] when `rows` is empty.
pub fn speed_domain(rows: &[TelemetryRow]) -> Result<AxisDomain> {
    if rows.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let fastest = rows.iter().map(|row| row.speed).fold(f64::NEG_INFINITY, f64::max);
    Ok(AxisDomain::new(0.0, 1.1 * fastest))
}

/// Vertical domain for the altitude chart: the observed range padded by
/// 10% on each side.
///
/// # Errors
/// Returns [`StatsError::EmptyInput`] when `rows` is empty.
pub fn altitude_domain(rows: &[TelemetryRow]) -> Result<AxisDomain> {
    if rows.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in rows {
        min = min.min(row.altitude);
        max = max.max(row.altitude);
    }

    Ok(AxisDomain::new(min, max).padded(0.10))
}

/// Horizontal domain covering the observed capture times.
///
/// # Errors
/// Returns [`StatsError::EmptyInput`] when `rows` is empty.
pub fn time_domain(rows: &[TelemetryRow]) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let first = match rows.first() {
        Some(row) => row.time,
        None => return Err(StatsError::EmptyInput),
    };

    let mut earliest = first;
    let mut latest = first;
    for row in rows {
        if row.time < earliest {
            earliest = row.time;
        }
        if row.time > latest {
            latest = row.time;
        }
    }

    Ok((earliest, latest))
}
