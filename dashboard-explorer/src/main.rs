//! Heart Failure Clinical Records Dashboard
//!
//! Three independent exploration views over the embedded patient records:
//! a density histogram of one continuous column, a four-way pie of an
//! indicator crossed with the outcome, and a scatter of two continuous
//! columns. A summary table of per-outcome means is rendered once.
//!
//! Data flow:
//! 1. `build.rs` copies the patient CSV into `OUT_DIR`.
//! 2. `include_str!` embeds it into the WASM binary.
//! 3. On mount, the CSV is loaded into an in-memory SQLite database and the
//!    dataset summary is computed.
//! 4. Each chart re-renders only when its own dropdown changes.

use dioxus::prelude::*;
use hfd_chart_ui::components::{ChartHeader, DashboardCharts, ErrorDisplay, LoadingSpinner};
use hfd_chart_ui::state::AppState;

/// Heart failure clinical records (299 patients when fetched in full).
const PATIENTS_CSV: &str = include_str!(concat!(
    env!("OUT_DIR"),
    "/heart_failure_clinical_records_dataset.csv"
));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("hfd-explorer-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the dataset once on mount
    use_effect(move || {
        log::info!("[HFD] explorer: loading {} bytes of patient CSV", PATIENTS_CSV.len());
        state.load(PATIENTS_CSV);
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            h1 {
                style: "margin: 0 0 12px 0; font-size: 24px;",
                "Heart Failure Clinical Records Dashboard"
            }
            ChartHeader {
                title: "Explore the dataset".to_string(),
                note: "Histogram bars are density-normalised per outcome; colours mark Survival and Death.".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                DashboardCharts {}
            }
        }
    }
}
