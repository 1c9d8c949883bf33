//! Heat map SVG: one rectangle per observation plus axes and legend.

use dioxus::prelude::*;
use gtv_heatmap::scene::Cell;
use gtv_heatmap::HeatMapScene;

use super::{AxisGroup, AxisTitleText, LegendGroup};
use crate::state::{AppState, TooltipState};

/// Draws a whole scene. A new scene replaces the previous drawing wholesale.
#[component]
pub fn HeatMapChart(scene: HeatMapScene) -> Element {
    let width = scene.width;
    let height = scene.height;
    let cells: Vec<(String, Cell)> = scene
        .cells
        .iter()
        .map(|cell| {
            let (year, month) = cell.key();
            (format!("{year}-{month}"), cell.clone())
        })
        .collect();

    rsx! {
        svg {
            width: "{width}",
            height: "{height}",
            for (key, cell) in cells {
                CellRect { key: "{key}", cell }
            }
            AxisGroup { axis: scene.x_axis.clone() }
            AxisGroup { axis: scene.y_axis.clone() }
            AxisTitleText { title: scene.x_title.clone() }
            AxisTitleText { title: scene.y_title.clone() }
            LegendGroup { legend: scene.legend.clone() }
        }
    }
}

/// One grid cell with its hover behaviour.
///
/// The tooltip content comes from this cell alone; the handlers only write
/// the shared tooltip signal.
#[component]
pub fn CellRect(cell: Cell) -> Element {
    let mut state = use_context::<AppState>();
    let config = state.config;
    let tooltip = cell.tooltip.clone();

    let on_enter = move |evt: Event<MouseData>| {
        let page = evt.page_coordinates();
        state
            .tooltip
            .set(Some(TooltipState::enter(&tooltip, page.x, page.y, &config)));
    };

    let on_move = move |evt: Event<MouseData>| {
        let page = evt.page_coordinates();
        TooltipState::moved(&mut state.tooltip.write(), page.x, page.y, &config);
    };

    let year = cell.observation.year;
    let temp = cell.temperature_tag();

    rsx! {
        rect {
            class: "cell",
            x: "{cell.x}",
            y: "{cell.y}",
            width: "{cell.width}",
            height: "{cell.height}",
            fill: "{cell.fill}",
            "data-month": "{cell.month_index}",
            "data-year": "{year}",
            "data-temp": "{temp}",
            onmouseenter: on_enter,
            onmousemove: on_move,
            onmouseleave: move |_| TooltipState::leave(&mut state.tooltip.write()),
        }
    }
}
