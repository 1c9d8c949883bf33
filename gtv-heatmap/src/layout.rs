//! Fixed chart geometry.

use serde::Deserialize;

/// Size and spacing of the heat map, in SVG user units.
///
/// Every field has a default, so a JSON override only needs the fields it
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    /// Space between the SVG edge and the plot area on every side.
    pub padding: f64,
    /// Shift applied to each cell so its top edge sits on the month gridline.
    pub row_offset: f64,
    /// Number of year ticks requested from the tick generator.
    pub x_ticks: usize,
    /// Length of axis tick marks.
    pub tick_size: f64,
    pub legend_swatch_size: f64,
    pub legend_swatch_step: f64,
    /// Tooltip offset from the pointer's page coordinates.
    pub tooltip_offset_x: f64,
    pub tooltip_offset_y: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1500.0,
            height: 700.0,
            padding: 100.0,
            row_offset: 45.0,
            x_ticks: 20,
            tick_size: 6.0,
            legend_swatch_size: 35.0,
            legend_swatch_step: 40.0,
            tooltip_offset_x: 10.0,
            tooltip_offset_y: -50.0,
        }
    }
}

impl ChartConfig {
    /// Width of the plot area inside the padding.
    pub fn inner_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    /// Height of the plot area inside the padding.
    pub fn inner_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }
}
