//! Chart container component.

use dioxus::prelude::*;
use gtv_heatmap::HeatMapScene;

use super::HeatMapChart;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id of the container div
    pub id: String,
    /// Scene to draw; the container stays empty until one exists
    #[props(default)]
    pub scene: Option<HeatMapScene>,
}

/// A container div holding the heat map SVG once the data has loaded.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    rsx! {
        div {
            id: "{props.id}",
            if let Some(scene) = props.scene.clone() {
                HeatMapChart { scene }
            }
        }
    }
}
