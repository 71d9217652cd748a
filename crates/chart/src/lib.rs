//! Chart rendering for RouteViz.
//!
//! This crate provides:
//! - Time-series line charts with horizontal reference marks
//! - An equal-scale route map with degrees/minutes/seconds tick labels
//! - A key/value stats table and a self-contained HTML report
//!
//! Charts are configured with plain immutable structs and rendered to
//! SVG strings, so reports embed them without touching the filesystem.
//!
//! # Example
//!
//! ```
//! use chrono::DateTime;
//! use routeviz_chart::{render_report, ReportConfig};
//! use routeviz_stats::TelemetryRow;
//!
//! let rows = vec![
//!     TelemetryRow {
//!         time: DateTime::from_timestamp(1_463_216_400, 0).unwrap(),
//!         latitude: 51.044935,
//!         longitude: 13.777610,
//!         altitude: 112.0,
//!         speed: 18.2,
//!     },
//!     TelemetryRow {
//!         time: DateTime::from_timestamp(1_463_216_430, 0).unwrap(),
//!         latitude: 51.050122,
//!         longitude: 13.775076,
//!         altitude: 116.5,
//!         speed: 21.6,
//!     },
//! ];
//!
//! let html = render_report(&rows, &ReportConfig::default()).unwrap();
//! assert!(html.contains("<table class=\"keyValue\">"));
//! ```

mod config;
mod error;
mod line;
mod map;
mod report;
mod table;

pub use config::{ChartGeometry, Margins};
pub use error::{ChartError, Result};
pub use line::{HorizontalMark, LineChart};
pub use map::RouteMap;
pub use report::{render_report, stats_entries, ReportConfig};
pub use table::{escape_html, key_value_table};

use plotters::style::RGBColor;
use routeviz_stats::AxisDomain;

/// Stroke color for data series.
pub(crate) const ROUTE_BLUE: RGBColor = RGBColor(0, 0, 255);

/// Stroke color for reference marks and their labels.
pub(crate) const MARK_GREY: RGBColor = RGBColor(90, 90, 90);

/// Widens a zero-span domain so the axis mapping stays well defined.
pub(crate) fn drawable(domain: AxisDomain, epsilon: f64) -> std::ops::Range<f64> {
    if domain.span() > 0.0 {
        domain.min..domain.max
    } else {
        (domain.min - epsilon)..(domain.max + epsilon)
    }
}
