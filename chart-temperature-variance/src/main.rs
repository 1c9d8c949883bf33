//! Monthly Global Land-Surface Temperature
//!
//! Heat map of monthly temperature variance since 1753, one cell per
//! (year, month), coloured by how far the month ran from the base temperature.
//!
//! Data flow:
//! 1. On mount: fetch the dataset JSON once (no retries).
//! 2. The fetch result moves `LoadState` from `Loading` to `Loaded` or `Error`.
//! 3. A memo derives the `PageModel`, which builds a fresh scene from the dataset.
//! 4. The scene is drawn as SVG; hovering a cell drives the shared tooltip.

use dioxus::prelude::*;
use gtv_chart_ui::components::{ChartContainer, ErrorDisplay, PageHeader, TooltipOverlay};
use gtv_chart_ui::loader;
use gtv_chart_ui::state::AppState;
use gtv_data::DATASET_URL;
use gtv_heatmap::PageModel;

/// DOM id for the chart container div.
const CHART_CONTAINER_ID: &str = "chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("temperature-variance-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect: fetch the dataset once on mount ───
    use_effect(move || {
        spawn(async move {
            let result = loader::fetch_dataset(DATASET_URL).await;
            match &result {
                Ok(dataset) => log::info!(
                    "[GTV] Loaded {} observations",
                    dataset.monthly_variance.len()
                ),
                Err(e) => log::error!("[GTV] Error fetching data: {}", e),
            }
            state.load.write().resolve(result);
        });
    });

    // ─── Page model: recomputed whenever the load state changes ───
    let page = use_memo(move || PageModel::from_state(&state.load.read(), &state.config));
    let page = page.read();

    rsx! {
        div {
            id: "main",
            style: "margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            PageHeader {
                title: page.title.to_string(),
                description: page.description.clone(),
            }

            if let Some(err) = page.error.as_ref() {
                ErrorDisplay { message: err.clone() }
            } else {
                ChartContainer {
                    id: CHART_CONTAINER_ID.to_string(),
                    scene: page.chart.clone(),
                }
            }

            TooltipOverlay {}
        }
    }
}
