//! Page header component with title and dataset description.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    /// Page title
    pub title: String,
    /// Year range and base temperature, or a loading message
    pub description: String,
}

/// Title and description shown above the chart.
#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        h1 {
            id: "title",
            style: "margin: 0 0 4px 0;",
            "{props.title}"
        }
        p {
            id: "description",
            style: "margin: 0 0 12px 0; color: #444;",
            "{props.description}"
        }
    }
}
