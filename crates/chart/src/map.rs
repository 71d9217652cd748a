//! The route map: the travelled track rendered to SVG.

use plotters::prelude::*;
use plotters::style::FontTransform;
use routeviz_geo::{format_latitude, format_longitude, GlyphSet};
use routeviz_stats::{route_domains, TelemetryRow};

use crate::config::ChartGeometry;
use crate::error::{to_render_error, Result};
use crate::{drawable, ROUTE_BLUE};

/// Immutable configuration for the route map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMap {
    /// Chart size and margins.
    pub geometry: ChartGeometry,
}

impl RouteMap {
    /// Renders the route as an SVG document.
    ///
    /// Axis domains are balanced so a kilometer covers the same number
    /// of pixels on both axes, and tick labels are formatted as unicode
    /// degrees/minutes/seconds with compass directions.
    ///
    /// # Arguments
    /// * `rows` - Telemetry samples in capture order
    ///
    /// # Errors
    /// Returns [`ChartError::Stats`](crate::ChartError::Stats) for empty
    /// input and [`ChartError::Render`](crate::ChartError::Render) when
    /// the backend fails to draw.
    pub fn render(&self, rows: &[TelemetryRow]) -> Result<String> {
        let domains = route_domains(
            rows,
            self.geometry.inner_width(),
            self.geometry.inner_height(),
        )?;

        let mut svg = String::new();
        {
            let root =
                SVGBackend::with_string(&mut svg, (self.geometry.width, self.geometry.height))
                    .into_drawing_area();
            root.fill(&WHITE).map_err(to_render_error)?;

            // Half a thousandth of a degree keeps a one-point route visible.
            let x_range = drawable(domains.longitude, 0.0005);
            let y_range = drawable(domains.latitude, 0.0005);

            let margins = self.geometry.margins;
            let mut chart = ChartBuilder::on(&root)
                .margin_top(margins.top)
                .margin_right(margins.right)
                .set_label_area_size(LabelAreaPosition::Left, margins.left)
                .set_label_area_size(LabelAreaPosition::Bottom, margins.bottom)
                .build_cartesian_2d(x_range, y_range)
                .map_err(to_render_error)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_labels(10)
                .y_labels(5)
                .x_label_style(
                    ("sans-serif", 11)
                        .into_font()
                        .transform(FontTransform::Rotate90),
                )
                .x_label_formatter(&|longitude| format_longitude(*longitude, GlyphSet::Unicode))
                .y_label_formatter(&|latitude| format_latitude(*latitude, GlyphSet::Unicode))
                .draw()
                .map_err(to_render_error)?;

            chart
                .draw_series(LineSeries::new(
                    rows.iter().map(|row| (row.longitude, row.latitude)),
                    ShapeStyle::from(&ROUTE_BLUE).stroke_width(2),
                ))
                .map_err(to_render_error)?;

            root.present().map_err(to_render_error)?;
        }

        Ok(svg)
    }
}
