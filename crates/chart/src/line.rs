//! Time-series line charts rendered to SVG.

use chrono::{DateTime, Utc};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;
use routeviz_stats::AxisDomain;

use crate::config::ChartGeometry;
use crate::error::{to_render_error, Result};
use crate::{drawable, MARK_GREY, ROUTE_BLUE};

/// A horizontal reference line drawn across the plot area.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizontalMark {
    /// Vertical position, in the chart's y unit.
    pub value: f64,
    /// Optional text drawn above the line at its right end.
    pub label: Option<String>,
}

impl HorizontalMark {
    /// A mark with no label.
    pub fn new(value: f64) -> Self {
        Self { value, label: None }
    }

    /// A mark with a label at its right end.
    pub fn labelled(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: Some(label.into()),
        }
    }
}

/// Immutable configuration for a time-series line chart.
///
/// Every knob is a plain field; build the struct, then call
/// [`LineChart::render`] with the points to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    /// Chart size and margins.
    pub geometry: ChartGeometry,
    /// Time covered by the x axis.
    pub x_domain: (DateTime<Utc>, DateTime<Utc>),
    /// Range covered by the y axis.
    pub y_domain: AxisDomain,
    /// Text appended to each y tick label, e.g. `" kph"`.
    pub y_tick_suffix: String,
    /// Reference lines drawn over the series.
    pub marks: Vec<HorizontalMark>,
}

impl LineChart {
    /// Renders `points` as an SVG document.
    ///
    /// Points are connected in the order given. Degenerate domains are
    /// widened slightly so a single sample still draws.
    ///
    /// # Arguments
    /// * `points` - Time/value pairs in drawing order
    ///
    /// # Errors
    /// Returns [`ChartError::Render`](crate::ChartError::Render) when
    /// the backend fails to draw.
    pub fn render(&self, points: &[(DateTime<Utc>, f64)]) -> Result<String> {
        let mut svg = String::new();
        {
            let root =
                SVGBackend::with_string(&mut svg, (self.geometry.width, self.geometry.height))
                    .into_drawing_area();
            root.fill(&WHITE).map_err(to_render_error)?;

            let x_start = timestamp_seconds(self.x_domain.0);
            let x_end = timestamp_seconds(self.x_domain.1);
            let x_range = drawable(AxisDomain::new(x_start, x_end), 1.0);
            let y_range = drawable(self.y_domain, 0.5);

            let margins = self.geometry.margins;
            let mut chart = ChartBuilder::on(&root)
                .margin_top(margins.top)
                .margin_right(margins.right)
                .set_label_area_size(LabelAreaPosition::Left, margins.left)
                .set_label_area_size(LabelAreaPosition::Bottom, margins.bottom)
                .build_cartesian_2d(x_range.clone(), y_range)
                .map_err(to_render_error)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_labels(10)
                .y_labels(10)
                .x_label_style(
                    ("sans-serif", 11)
                        .into_font()
                        .transform(FontTransform::Rotate90),
                )
                .x_label_formatter(&|seconds| time_label(*seconds))
                .y_label_formatter(&|value| format!("{}{}", value, self.y_tick_suffix))
                .draw()
                .map_err(to_render_error)?;

            chart
                .draw_series(LineSeries::new(
                    points
                        .iter()
                        .map(|(time, value)| (timestamp_seconds(*time), *value)),
                    ShapeStyle::from(&ROUTE_BLUE).stroke_width(2),
                ))
                .map_err(to_render_error)?;

            for mark in &self.marks {
                chart
                    .draw_series(LineSeries::new(
                        [(x_range.start, mark.value), (x_range.end, mark.value)],
                        &MARK_GREY,
                    ))
                    .map_err(to_render_error)?;

                if let Some(label) = &mark.label {
                    let style = TextStyle::from(("sans-serif", 12).into_font())
                        .color(&MARK_GREY)
                        .pos(Pos::new(HPos::Right, VPos::Bottom));
                    chart
                        .draw_series(std::iter::once(Text::new(
                            label.clone(),
                            (x_range.end, mark.value),
                            style,
                        )))
                        .map_err(to_render_error)?;
                }
            }

            root.present().map_err(to_render_error)?;
        }

        Ok(svg)
    }
}

/// Seconds since the Unix epoch, with millisecond precision.
fn timestamp_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

fn time_label(seconds: f64) -> String {
    DateTime::from_timestamp(seconds as i64, 0)
        .map(|time| time.format("%H:%M:%S").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<(DateTime<Utc>, f64)> {
        (0..10)
            .map(|i| {
                let time = DateTime::from_timestamp(1_463_216_400 + i * 10, 0).unwrap();
                (time, 10.0 + i as f64)
            })
            .collect()
    }

    fn sample_chart() -> LineChart {
        let points = sample_points();
        LineChart {
            geometry: ChartGeometry::line_chart(),
            x_domain: (points[0].0, points[points.len() - 1].0),
            y_domain: AxisDomain::new(0.0, 22.0),
            y_tick_suffix: " kph".to_string(),
            marks: Vec::new(),
        }
    }

    #[test]
    fn test_render_produces_svg_with_tick_suffix() {
        let svg = sample_chart().render(&sample_points()).unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("kph"));
    }

    #[test]
    fn test_marks_draw_their_labels() {
        let mut chart = sample_chart();
        chart.marks = vec![
            HorizontalMark::new(12.0),
            HorizontalMark::labelled(19.0, "fastest 19.00 kph"),
        ];

        let svg = chart.render(&sample_points()).unwrap();
        assert!(svg.contains("fastest 19.00 kph"));
    }

    #[test]
    fn test_single_point_renders() {
        let time = DateTime::from_timestamp(0, 0).unwrap();
        let chart = LineChart {
            geometry: ChartGeometry::line_chart(),
            x_domain: (time, time),
            y_domain: AxisDomain::new(5.0, 5.0),
            y_tick_suffix: " m".to_string(),
            marks: Vec::new(),
        };

        let svg = chart.render(&[(time, 5.0)]).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_time_labels_use_clock_time() {
        let svg = sample_chart().render(&sample_points()).unwrap();
        // 1463216400 is 09:00:00 UTC.
        assert!(svg.contains("09:00:"));
    }
}
