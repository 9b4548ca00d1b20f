//! Sized container that a D3.js chart renders into.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    #[props(default = 360)]
    pub min_height: u32,
}

/// A container div for D3.js charts. Page-level loading is shown by
/// `LoadingSpinner`, so the container itself has no loading state.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!("min-height: {}px; width: 100%;", props.min_height);

    rsx! {
        div { id: "{props.id}", style: "{style}" }
    }
}
