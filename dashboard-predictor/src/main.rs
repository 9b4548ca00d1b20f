//! Heart Failure Clinical Records Dashboard with outcome prediction
//!
//! The same three exploration views as `dashboard-explorer`, plus a
//! predictor card: twelve patient attributes entered by hand and a Predict
//! button that runs the embedded pre-trained classifier. An incomplete form
//! yields a prompt instead of a prediction; the result region stays empty
//! until the first click.

use dioxus::prelude::*;
use hfd_chart_ui::components::{
    Card, ChartHeader, DashboardCharts, ErrorDisplay, LoadingSpinner, PredictorForm,
};
use hfd_chart_ui::state::{AppState, PredictorState};
use hfd_model::load_classifier;

/// Heart failure clinical records (299 patients when fetched in full).
const PATIENTS_CSV: &str = include_str!(concat!(
    env!("OUT_DIR"),
    "/heart_failure_clinical_records_dataset.csv"
));
/// Serialized classifier, validated by `build.rs`.
const MODEL_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/heart_failure_model.json"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("hfd-predictor-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut predictor = use_context_provider(PredictorState::new);

    // Load the dataset and the classifier once on mount
    use_effect(move || {
        state.load(PATIENTS_CSV);
        match load_classifier(MODEL_JSON) {
            Ok(classifier) => predictor.classifier.set(Some(classifier)),
            Err(e) => {
                log::error!("[HFD] failed to load classifier: {:#}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load prediction model: {:#}", e)));
            }
        }
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            h1 {
                style: "margin: 0 0 12px 0; font-size: 24px;",
                "Heart Failure Clinical Records Dashboard"
            }
            ChartHeader {
                title: "Explore the dataset and predict patient outcomes".to_string(),
                note: "Predictions come from a pre-trained classifier; input ranges shown are hints from the dataset.".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                DashboardCharts {}
                Card {
                    title: "Predict Patient Outcome".to_string(),
                    PredictorForm {}
                }
            }
        }
    }
}
