//! Colour legend: one swatch per bucket, labelled with its lower bound.

use dioxus::prelude::*;
use gtv_heatmap::scene::Legend;

#[component]
pub fn LegendGroup(legend: Legend) -> Element {
    let transform = legend.transform();

    rsx! {
        g {
            id: "legend",
            "transform": "{transform}",
            for swatch in legend.swatches.iter() {
                rect {
                    key: "swatch-{swatch.fill}",
                    x: "{swatch.x}",
                    y: "{swatch.y}",
                    width: "{swatch.size}",
                    height: "{swatch.size}",
                    fill: "{swatch.fill}",
                }
            }
            for swatch in legend.swatches.iter() {
                g {
                    key: "label-{swatch.fill}",
                    text {
                        x: "{swatch.label_x}",
                        y: "{swatch.label_y}",
                        "text-anchor": "middle",
                        style: "fill: black;",
                        "{swatch.label}"
                    }
                }
            }
        }
    }
}
