//! The self-contained HTML report: summary table plus three charts.

use routeviz_stats::{
    aggregate, altitude_domain, speed_domain, time_domain, StatsResult, TelemetryRow,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ChartGeometry;
use crate::error::Result;
use crate::line::{HorizontalMark, LineChart};
use crate::map::RouteMap;
use crate::table::{escape_html, key_value_table};

/// Report settings, typically read from a config file.
///
/// Every field has a default, so a partial config only overrides what it
/// names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Page title, also used as the `<h1>` heading.
    pub title: String,
    /// Unit suffix shown next to speed values, for example "kph".
    pub speed_unit: String,
    /// Size and margins for the speed and altitude charts.
    pub line_geometry: ChartGeometry,
    /// Size and margins for the route map.
    pub map_geometry: ChartGeometry,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Route Report".to_string(),
            speed_unit: "kph".to_string(),
            line_geometry: ChartGeometry::line_chart(),
            map_geometry: ChartGeometry::route_map(),
        }
    }
}

/// Builds the summary table rows in display order.
///
/// Speed values carry `speed_unit`. Coordinates are rendered with HTML
/// entities, ready to embed in markup without further escaping.
pub fn stats_entries(stats: &StatsResult, speed_unit: &str) -> Vec<(String, String)> {
    vec![
        (
            "Distance Travelled".to_string(),
            format!("{:.1} m", stats.distance_travelled_meters),
        ),
        (
            "Fastest Speed".to_string(),
            format!("{:.2} {}", stats.fastest_speed, speed_unit),
        ),
        (
            "Average Speed".to_string(),
            format!("{:.2} {}", stats.average_speed, speed_unit),
        ),
        (
            "Highest Point".to_string(),
            format!("{} ({:.2} m)", stats.highest_point, stats.max_altitude),
        ),
        (
            "Average Altitude".to_string(),
            format!("{:.2} m", stats.average_altitude),
        ),
        ("Central Point".to_string(), stats.central_point.to_string()),
    ]
}

/// Renders the full HTML report for a route.
///
/// The page contains the summary table, a speed chart with a "fastest"
/// reference mark, an altitude chart with a "highest" mark, and the
/// equal-scale route map. All SVG is embedded inline.
///
/// # Arguments
/// * `rows` - Telemetry samples in capture order
/// * `config` - Page title, speed unit and chart geometry
///
/// # Errors
/// Returns [`ChartError::Stats`](crate::ChartError::Stats) when `rows`
/// is empty and [`ChartError::Render`](crate::ChartError::Render) when
/// a chart fails to draw.
pub fn render_report(rows: &[TelemetryRow], config: &ReportConfig) -> Result<String> {
    let stats = aggregate(rows)?;
    let x_domain = time_domain(rows)?;

    let speed_chart = LineChart {
        geometry: config.line_geometry,
        x_domain,
        y_domain: speed_domain(rows)?,
        y_tick_suffix: format!(" {}", config.speed_unit),
        marks: vec![HorizontalMark::labelled(
            stats.fastest_speed,
            format!("fastest {:.2} {}", stats.fastest_speed, config.speed_unit),
        )],
    };
    let speed_points: Vec<_> = rows.iter().map(|row| (row.time, row.speed)).collect();
    let speed_svg = speed_chart.render(&speed_points)?;

    let altitude_chart = LineChart {
        geometry: config.line_geometry,
        x_domain,
        y_domain: altitude_domain(rows)?,
        y_tick_suffix: " m".to_string(),
        marks: vec![HorizontalMark::labelled(
            stats.max_altitude,
            format!("highest {:.2} m", stats.max_altitude),
        )],
    };
    let altitude_points: Vec<_> = rows.iter().map(|row| (row.time, row.altitude)).collect();
    let altitude_svg = altitude_chart.render(&altitude_points)?;

    let map_svg = RouteMap {
        geometry: config.map_geometry,
    }
    .render(rows)?;

    debug!(rows = rows.len(), title = %config.title, "Rendered report charts");

    Ok(build_page(
        &config.title,
        &stats_entries(&stats, &config.speed_unit),
        &speed_svg,
        &altitude_svg,
        &map_svg,
    ))
}

const PAGE_STYLE: &str = "\
body { font-family: sans-serif; margin: 2em; }
h2 { margin-top: 1.5em; }
table.keyValue { border-collapse: collapse; }
table.keyValue th, table.keyValue td { padding: 0.2em 1.5em 0.2em 0; text-align: left; }
";

fn build_page(
    title: &str,
    entries: &[(String, String)],
    speed_svg: &str,
    altitude_svg: &str,
    map_svg: &str,
) -> String {
    let escaped_title = escape_html(title);

    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>");
    page.push_str(&escaped_title);
    page.push_str("</title>\n<style>\n");
    page.push_str(PAGE_STYLE);
    page.push_str("</style>\n</head>\n<body>\n<h1>");
    page.push_str(&escaped_title);
    page.push_str("</h1>\n<h2>Stats</h2>\n");
    page.push_str(&key_value_table(entries));
    page.push_str("<h2>Speed</h2>\n");
    page.push_str(speed_svg);
    page.push_str("\n<h2>Altitude</h2>\n");
    page.push_str(altitude_svg);
    page.push_str("\n<h2>Route</h2>\n");
    page.push_str(map_svg);
    page.push_str("\n</body>\n</html>\n");
    page
}
