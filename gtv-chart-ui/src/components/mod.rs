//! Reusable Dioxus RSX components for the heat map page.

mod axis;
mod chart_container;
mod error_display;
mod heat_map;
mod legend;
mod page_header;
mod tooltip;

pub use axis::{AxisGroup, AxisTitleText};
pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use heat_map::{CellRect, HeatMapChart};
pub use legend::LegendGroup;
pub use page_header::PageHeader;
pub use tooltip::TooltipOverlay;
