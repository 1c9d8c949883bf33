//! Load state machine and the page it produces.
//!
//! ```text
//! Loading ──ok──▶ Loaded   (terminal)
//!    │
//!    └──err──▶ Error       (terminal)
//! ```

use gtv_data::{Dataset, FetchError};

use crate::layout::ChartConfig;
use crate::scene::HeatMapScene;

pub const TITLE: &str = "Monthly Global Land-Surface Temperature";

/// Where the single dataset fetch stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Error(FetchError),
    Loaded(Dataset),
}

impl LoadState {
    /// Apply the outcome of the fetch.
    ///
    /// Only `Loading` moves; `Error` and `Loaded` are terminal and ignore any
    /// later result.
    pub fn resolve(&mut self, result: Result<Dataset, FetchError>) {
        if !matches!(self, LoadState::Loading) {
            log::warn!("Ignoring fetch result: load state is already final");
            return;
        }
        *self = match result {
            Ok(dataset) => LoadState::Loaded(dataset),
            Err(err) => LoadState::Error(err),
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        match self {
            LoadState::Loaded(dataset) => Some(dataset),
            _ => None,
        }
    }
}

/// What the page shows for a given load state.
#[derive(Debug, Clone, PartialEq)]
pub struct PageModel {
    pub title: &'static str,
    pub description: String,
    /// User-facing error line; when set the chart container is absent.
    pub error: Option<String>,
    /// Scene for the chart container, present only once loaded.
    pub chart: Option<HeatMapScene>,
}

impl PageModel {
    pub fn from_state(state: &LoadState, config: &ChartConfig) -> Self {
        match state {
            LoadState::Loading => Self {
                title: TITLE,
                description: "Loading...".to_string(),
                error: None,
                chart: None,
            },
            LoadState::Error(err) => Self {
                title: TITLE,
                description: "Loading...".to_string(),
                error: Some(err.user_message().to_string()),
                chart: None,
            },
            LoadState::Loaded(dataset) => Self {
                title: TITLE,
                description: describe(dataset),
                error: None,
                chart: HeatMapScene::build(dataset, config),
            },
        }
    }

    /// Whether the `#chart` container is part of the page.
    pub fn shows_chart_container(&self) -> bool {
        self.error.is_none()
    }

    pub fn rectangle_count(&self) -> usize {
        self.chart.as_ref().map_or(0, |scene| scene.cells.len())
    }
}

/// `"<first year> - <last year>: base temperature <base>℃"`
pub fn describe(dataset: &Dataset) -> String {
    match dataset.year_range() {
        Some((first, last)) => format!(
            "{} - {}: base temperature {:.2}℃",
            first, last, dataset.base_temperature
        ),
        None => format!("base temperature {:.2}℃", dataset.base_temperature),
    }
}
