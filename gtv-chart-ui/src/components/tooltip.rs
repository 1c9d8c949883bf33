//! Floating tooltip for the hovered cell.

use dioxus::prelude::*;

use crate::state::{AppState, TooltipState};

const TOOLTIP_STYLE: &str = "position: absolute; pointer-events: none; padding: 6px 10px; \
     background: rgba(255, 255, 204, 0.9); border: 1px solid #999; border-radius: 4px; \
     font-size: 12px; text-align: center;";

/// The single `#tooltip` element, hidden until a cell is hovered.
#[component]
pub fn TooltipOverlay() -> Element {
    let state = use_context::<AppState>();
    let current = state.tooltip.read().clone();

    match current {
        Some(TooltipState { tooltip, position }) => {
            let year = tooltip.year;
            let [heading, temperature, variance] = tooltip.lines();
            rsx! {
                div {
                    id: "tooltip",
                    "data-year": "{year}",
                    style: "{TOOLTIP_STYLE} display: block; left: {position.left}px; top: {position.top}px;",
                    "{heading}"
                    br {}
                    "{temperature}"
                    br {}
                    "{variance}"
                }
            }
        }
        None => rsx! {
            div {
                id: "tooltip",
                style: "{TOOLTIP_STYLE} display: none;",
            }
        },
    }
}
