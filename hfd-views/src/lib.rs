//! View functions for the heart failure dashboards.
//!
//! Each function is bound (by the app) to one set of input widgets and one
//! output region. It reads the shared, immutable [`Database`] (or the
//! aggregates computed once at load), and returns a [`ChartPayload`]: the
//! data and config JSON strings handed to a D3.js render function. No view
//! mutates anything or depends on another view's output.
//!
//! - [`distribution_view`]: histogram of one continuous column by outcome
//! - [`breakdown_view`]: four-way pie of an indicator crossed with outcome
//! - [`relationship_view`]: scatter of two continuous columns by outcome
//! - [`summary_view`]: per-column means/bounds table
//! - [`prediction_view`]: predictor form to result text

mod summary;

pub use summary::{summary_view, DatasetSummary, SummaryRow};

use hfd_db::{Database, DISTRIBUTION_BINS};
use hfd_model::{predict_from_form, Classifier, PredictionForm};
use hfd_records::column::OUTCOME_DISPLAY_NAME;
use hfd_records::{ContinuousColumn, IndicatorColumn, Outcome};
use serde_json::json;

/// Serialized input for one D3.js render call.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPayload {
    pub data_json: String,
    pub config_json: String,
}

impl ChartPayload {
    fn new<T: serde::Serialize>(data: &T, config: serde_json::Value) -> anyhow::Result<Self> {
        Ok(Self {
            data_json: serde_json::to_string(data)?,
            config_json: serde_json::to_string(&config)?,
        })
    }
}

/// `{"Survival": "#...", "Death": "#..."}`, shared by every chart.
fn outcome_colors() -> serde_json::Value {
    let mut colors = serde_json::Map::new();
    for outcome in Outcome::ALL {
        colors.insert(outcome.as_str().to_string(), json!(outcome.color()));
    }
    serde_json::Value::Object(colors)
}

/// Histogram of `column`, coloured by outcome, density-normalised, 11 bins.
pub fn distribution_view(db: &Database, column: ContinuousColumn) -> anyhow::Result<ChartPayload> {
    let bins = db.query_distribution(column, DISTRIBUTION_BINS)?;
    ChartPayload::new(
        &bins,
        json!({
            "title": format!("Distribution of {}", column.display_name()),
            "xAxisLabel": column.display_name(),
            "yAxisLabel": "Density",
            "legendTitle": OUTCOME_DISPLAY_NAME,
            "bins": DISTRIBUTION_BINS,
            "barGap": 0.1,
            "colors": outcome_colors(),
        }),
    )
}

/// Pie chart of the four indicator-by-outcome categories.
pub fn breakdown_view(db: &Database, column: IndicatorColumn) -> anyhow::Result<ChartPayload> {
    let slices = db.query_breakdown(column)?;
    ChartPayload::new(
        &slices,
        json!({
            "title": format!("Breakdown of {} by Survival", column.display_name()),
            "colors": ["#EF553B", "#636EFA", "#FFA15A", "#00CC96"],
        }),
    )
}

/// Scatter plot of `x` against `y`, coloured by outcome. `x == y` is allowed.
pub fn relationship_view(
    db: &Database,
    x: ContinuousColumn,
    y: ContinuousColumn,
) -> anyhow::Result<ChartPayload> {
    let points = db.query_scatter(x, y)?;
    ChartPayload::new(
        &points,
        json!({
            "title": format!("Scatter Plot of {} vs {}", x.display_name(), y.display_name()),
            "xAxisLabel": x.display_name(),
            "yAxisLabel": y.display_name(),
            "legendTitle": OUTCOME_DISPLAY_NAME,
            "colors": outcome_colors(),
        }),
    )
}

/// Shown by the predictor when no classifier has been loaded.
pub const MODEL_UNAVAILABLE: &str = "Prediction model is not available.";

/// Text for the predictor's result region: the completion prompt while any
/// field is unset, otherwise "Survival" or "Death". Without a classifier
/// the form is not consulted at all.
pub fn prediction_view(form: &PredictionForm, classifier: Option<&Classifier>) -> String {
    match classifier {
        Some(classifier) => predict_from_form(form, classifier).message().to_string(),
        None => {
            log::warn!("[HFD] views: prediction requested without a loaded model");
            MODEL_UNAVAILABLE.to_string()
        }
    }
}
