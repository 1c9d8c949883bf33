//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use gtv_heatmap::{ChartConfig, LoadState};

pub use gtv_heatmap::TooltipState;

/// Shared state for the heat map page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Progress of the single dataset fetch
    pub load: Signal<LoadState>,
    /// Tooltip for the hovered cell, `None` when nothing is hovered
    pub tooltip: Signal<Option<TooltipState>>,
    /// Chart geometry
    pub config: ChartConfig,
}

impl AppState {
    /// Create a new AppState in the `Loading` state.
    pub fn new() -> Self {
        Self {
            load: Signal::new(LoadState::Loading),
            tooltip: Signal::new(None),
            config: ChartConfig::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
