//! Axis groups and axis titles.

use dioxus::prelude::*;
use gtv_heatmap::scene::{Axis, AxisTitle};

/// Domain line, tick marks and tick labels for one axis.
#[component]
pub fn AxisGroup(axis: Axis) -> Element {
    let id = axis.id;
    let transform = axis.transform();
    let domain = axis.domain_path();
    let anchor = axis.text_anchor();
    let dy = axis.label_dy();
    let (line_x, line_y) = axis.tick_line_end();
    let (label_x, label_y) = axis.tick_label_anchor();
    let ticks: Vec<(String, String)> = axis
        .ticks
        .iter()
        .map(|tick| (axis.tick_transform(tick), tick.label.clone()))
        .collect();

    rsx! {
        g {
            id: "{id}",
            "transform": "{transform}",
            fill: "none",
            "font-size": "10",
            "font-family": "sans-serif",
            "text-anchor": "{anchor}",
            path {
                class: "domain",
                stroke: "currentColor",
                d: "{domain}",
            }
            for (tick_transform, label) in ticks {
                g {
                    key: "{label}",
                    class: "tick",
                    "transform": "{tick_transform}",
                    line {
                        stroke: "currentColor",
                        x2: "{line_x}",
                        y2: "{line_y}",
                    }
                    text {
                        fill: "currentColor",
                        x: "{label_x}",
                        y: "{label_y}",
                        "dy": "{dy}",
                        "{label}"
                    }
                }
            }
        }
    }
}

/// Centered axis title, optionally rotated.
#[component]
pub fn AxisTitleText(title: AxisTitle) -> Element {
    let transform = title.transform().unwrap_or_default();
    let text = title.text;

    rsx! {
        text {
            class: "axis-label",
            x: "{title.x}",
            y: "{title.y}",
            "text-anchor": "middle",
            "transform": "{transform}",
            "{text}"
        }
    }
}
