//! Degrees/minutes/seconds formatting for coordinate display.
//!
//! Values are rendered as `D°MM'SS.S"` followed by a compass direction,
//! using either Unicode glyphs or HTML entities for the punctuation marks.

use crate::text::left_pad;

/// Glyphs used for the degree, minute, and second marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphSet {
    /// `°`, `’`, `”` for plain-text output such as chart axis labels.
    Unicode,
    /// `&#0176;`, `&#8217;`, `&#8221;` for embedding in generated markup.
    HtmlEntity,
}

impl GlyphSet {
    #[inline]
    fn degree(self) -> &'static str {
        match self {
            GlyphSet::Unicode => "\u{00b0}",
            GlyphSet::HtmlEntity => "&#0176;",
        }
    }

    #[inline]
    fn minute(self) -> &'static str {
        match self {
            GlyphSet::Unicode => "\u{2019}",
            GlyphSet::HtmlEntity => "&#8217;",
        }
    }

    #[inline]
    fn second(self) -> &'static str {
        match self {
            GlyphSet::Unicode => "\u{201d}",
            GlyphSet::HtmlEntity => "&#8221;",
        }
    }
}

/// Formats an angle in degrees as degrees, minutes, and seconds.
///
/// The sign is discarded; callers append a compass direction instead.
/// Minutes are zero-padded to two digits and seconds to a fixed `SS.S`
/// shape, with the tenths digit rounded half-up. Seconds that round up
/// to `60.0` are rendered as-is rather than carried into the minutes.
///
/// # Arguments
/// * `value` - Angle in degrees
/// * `glyphs` - Glyph set for the degree, minute, and second marks
///
/// # Returns
/// The formatted angle, e.g. `53°23’13.7”`
pub fn format_dms(value: f64, glyphs: GlyphSet) -> String {
    let value = value.abs();

    let degrees = value.floor();
    let remainder = 60.0 * (value - degrees);
    let minutes = remainder.floor();
    let remainder = 60.0 * (remainder - minutes);
    let seconds = (remainder * 10.0).round() / 10.0;

    format!(
        "{}{}{}{}{}{}",
        degrees,
        glyphs.degree(),
        left_pad(&minutes.to_string(), 2, '0'),
        glyphs.minute(),
        left_pad(&format!("{seconds:.1}"), 4, '0'),
        glyphs.second(),
    )
}

/// Formats a latitude as degrees/minutes/seconds with an N/S suffix.
///
/// Negative latitudes are south of the equator; everything else,
/// including zero, is rendered as north.
///
/// # Example
/// ```
/// use routeviz_geo::{format_latitude, GlyphSet};
///
/// assert_eq!(format_latitude(53.387135, GlyphSet::Unicode), "53°23’13.7”N");
/// assert_eq!(format_latitude(-63.578958, GlyphSet::Unicode), "63°34’44.2”S");
/// ```
pub fn format_latitude(value: f64, glyphs: GlyphSet) -> String {
    let direction = if value < 0.0 { "S" } else { "N" };
    format!("{}{}", format_dms(value, glyphs), direction)
}

/// Formats a longitude as degrees/minutes/seconds with an E/W suffix.
///
/// Negative longitudes are west of the prime meridian; everything else,
/// including zero, is rendered as east.
///
/// # Example
/// ```
/// use routeviz_geo::{format_longitude, GlyphSet};
///
/// assert_eq!(format_longitude(-1.464492, GlyphSet::Unicode), "1°27’52.2”W");
/// ```
pub fn format_longitude(value: f64, glyphs: GlyphSet) -> String {
    let direction = if value < 0.0 { "W" } else { "E" };
    format!("{}{}", format_dms(value, glyphs), direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_unicode() {
        assert_eq!(format_latitude(0.0, GlyphSet::Unicode), "0°00’00.0”N");
        assert_eq!(format_latitude(53.387135, GlyphSet::Unicode), "53°23’13.7”N");
        assert_eq!(format_latitude(-63.578958, GlyphSet::Unicode), "63°34’44.2”S");
    }

    #[test]
    fn test_longitude_unicode() {
        assert_eq!(format_longitude(0.0, GlyphSet::Unicode), "0°00’00.0”E");
        assert_eq!(format_longitude(-1.464492, GlyphSet::Unicode), "1°27’52.2”W");
        assert_eq!(format_longitude(-55.786564, GlyphSet::Unicode), "55°47’11.6”W");
    }

    #[test]
    fn test_html_entity_glyphs() {
        assert_eq!(
            format_latitude(53.387135, GlyphSet::HtmlEntity),
            "53&#0176;23&#8217;13.7&#8221;N"
        );
        assert_eq!(
            format_longitude(-1.464492, GlyphSet::HtmlEntity),
            "1&#0176;27&#8217;52.2&#8221;W"
        );
    }

    #[test]
    fn test_compass_direction_at_boundaries() {
        assert!(format_latitude(90.0, GlyphSet::Unicode).ends_with('N'));
        assert!(format_latitude(-90.0, GlyphSet::Unicode).ends_with('S'));
        assert!(format_longitude(180.0, GlyphSet::Unicode).ends_with('E'));
        assert!(format_longitude(-180.0, GlyphSet::Unicode).ends_with('W'));
    }

    #[test]
    fn test_single_digit_minutes_are_padded() {
        assert_eq!(format_latitude(10.05, GlyphSet::Unicode), "10°03’00.0”N");
    }

    #[test]
    fn test_seconds_rounding_up_to_sixty_is_not_carried() {
        // 59.98 seconds rounds to 60.0 at the tenths digit and stays there.
        assert_eq!(format_latitude(59.98 / 3600.0, GlyphSet::Unicode), "0°00’60.0”N");
    }
}
