//! Chart geometry shared by the line charts and the route map.

use serde::{Deserialize, Serialize};

/// Pixel margins around the plot area.
///
/// The left and bottom margins double as the axis label areas, so they
/// are larger on charts with long tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    /// Space above the plot area.
    pub top: u32,
    /// Space to the right of the plot area.
    pub right: u32,
    /// Space below the plot area, holding the x axis labels.
    pub bottom: u32,
    /// Space to the left of the plot area, holding the y axis labels.
    pub left: u32,
}

impl Margins {
    /// Creates margins in CSS order: top, right, bottom, left.
    #[inline]
    pub fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }
}

/// Overall size and margins of a rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartGeometry {
    /// Total chart width in pixels.
    pub width: u32,
    /// Total chart height in pixels.
    pub height: u32,
    /// Margins around the plot area.
    pub margins: Margins,
}

impl ChartGeometry {
    /// The default geometry for time-series line charts.
    pub fn line_chart() -> Self {
        Self {
            width: 600,
            height: 400,
            margins: Margins::new(25, 25, 55, 45),
        }
    }

    /// The default geometry for the route map, with wider label areas
    /// for the degrees/minutes/seconds ticks.
    pub fn route_map() -> Self {
        Self {
            width: 600,
            height: 400,
            margins: Margins::new(25, 25, 70, 70),
        }
    }

    /// Plot area width in pixels, excluding margins.
    #[inline]
    pub fn inner_width(&self) -> f64 {
        let margins = self.margins.left.saturating_add(self.margins.right);
        self.width.saturating_sub(margins) as f64
    }

    /// Plot area height in pixels, excluding margins.
    #[inline]
    pub fn inner_height(&self) -> f64 {
        let margins = self.margins.top.saturating_add(self.margins.bottom);
        self.height.saturating_sub(margins) as f64
    }
}
