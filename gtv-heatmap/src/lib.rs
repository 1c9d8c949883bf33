//! Scales, ticks and scene geometry for the temperature variance heat map.
//!
//! Everything here is pure and platform independent so the chart can be
//! tested natively and rendered by the Dioxus components in `gtv-chart-ui`.
//!
//! # Pipeline
//!
//! 1. [`scale::Scales::from_dataset`] derives the year, month and colour scales.
//! 2. [`scene::HeatMapScene::build`] lays out cells, axes and legend.
//! 3. [`view::PageModel::from_state`] turns the load state into what the page shows.

pub mod layout;
pub mod palette;
pub mod scale;
pub mod scene;
pub mod ticks;
pub mod tooltip;
pub mod view;

pub use layout::ChartConfig;
pub use scale::Scales;
pub use scene::HeatMapScene;
pub use tooltip::{Tooltip, TooltipPosition, TooltipState};
pub use view::{LoadState, PageModel};
