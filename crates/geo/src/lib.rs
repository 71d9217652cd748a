//! Geospatial core for RouteViz.
//!
//! This crate provides:
//! - An immutable [`Coordinate`] value type
//! - Degrees/minutes/seconds formatting with compass directions
//! - Haversine great-circle distance calculations
//!
//! # Example
//!
//! ```
//! use routeviz_geo::{Coordinate, GlyphSet};
//!
//! let office = Coordinate::new(53.387135, -1.464492); // Sheffield
//! assert_eq!(office.formatted_latitude(GlyphSet::Unicode), "53°23’13.7”N");
//! assert_eq!(office.formatted_longitude(GlyphSet::Unicode), "1°27’52.2”W");
//!
//! let dresden = Coordinate::new(51.044935, 13.777610);
//! let distance_km = office.distance_in_km(&dresden);
//! assert!((distance_km - 1068.0).abs() < 10.0); // ~1068 km
//! ```

pub mod format;
mod haversine;
pub mod text;

pub use format::{format_dms, format_latitude, format_longitude, GlyphSet};
pub use haversine::{distance_km, EARTH_RADIUS_KM};
pub use text::left_pad;

/// A geographic coordinate with latitude and longitude.
///
/// Coordinates are plain immutable values. Construction is permissive:
/// out-of-range degrees are stored as given, and [`Coordinate::is_valid`]
/// reports whether they fall in the standard ranges.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if the coordinate falls within the standard ranges.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Formats the latitude as degrees/minutes/seconds with an N/S suffix.
    ///
    /// # Example
    ///
    /// ```
    /// use routeviz_geo::{Coordinate, GlyphSet};
    ///
    /// let coord = Coordinate::new(-63.578958, -55.786564);
    /// assert_eq!(coord.formatted_latitude(GlyphSet::Unicode), "63°34’44.2”S");
    /// ```
    #[inline]
    pub fn formatted_latitude(&self, glyphs: GlyphSet) -> String {
        format_latitude(self.latitude, glyphs)
    }

    /// Formats the longitude as degrees/minutes/seconds with an E/W suffix.
    #[inline]
    pub fn formatted_longitude(&self, glyphs: GlyphSet) -> String {
        format_longitude(self.longitude, glyphs)
    }

    /// Returns the great-circle distance to `other` in kilometres.
    #[inline]
    pub fn distance_in_km(&self, other: &Coordinate) -> f64 {
        distance_km(self, other)
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// Renders `(lat, lon)` with HTML-entity glyphs, ready for embedding in
/// generated markup.
impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {})",
            self.formatted_latitude(GlyphSet::HtmlEntity),
            self.formatted_longitude(GlyphSet::HtmlEntity)
        )
    }
}
