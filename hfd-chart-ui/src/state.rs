//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the dataset-level signals shared by both dashboards;
//! `PredictorState` adds the prediction form. Both are provided via
//! `use_context_provider` and retrieved with `use_context::<...>()`.

use dioxus::prelude::*;
use hfd_db::Database;
use hfd_model::{Classifier, PredictionForm};
use hfd_records::{ContinuousColumn, IndicatorColumn};
use hfd_views::DatasetSummary;

/// Shared application state for the heart failure dashboards.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Counts, means and bounds computed once after loading
    pub summary: Signal<Option<DatasetSummary>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Column shown in the distribution histogram
    pub distribution_column: Signal<ContinuousColumn>,
    /// Indicator shown in the breakdown pie
    pub breakdown_column: Signal<IndicatorColumn>,
    pub scatter_x: Signal<ContinuousColumn>,
    pub scatter_y: Signal<ContinuousColumn>,
}

impl AppState {
    /// Create a new AppState with the initial widget selections.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            summary: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            distribution_column: Signal::new(ContinuousColumn::Age),
            breakdown_column: Signal::new(IndicatorColumn::Sex),
            scatter_x: Signal::new(ContinuousColumn::Age),
            scatter_y: Signal::new(ContinuousColumn::SerumCreatinine),
        }
    }

    /// Load the patient CSV into a fresh database and compute the summary.
    ///
    /// On failure the database stays `None` and `error_msg` is set; the
    /// loading flag is cleared either way.
    pub fn load(&mut self, csv_data: &str) {
        let loaded = Database::new().and_then(|db| {
            let count = db.load_patients(csv_data)?;
            let summary = DatasetSummary::compute(&db)?;
            Ok((db, summary, count))
        });

        match loaded {
            Ok((db, summary, count)) => {
                log::info!("[HFD] loaded {} patients", count);
                self.summary.set(Some(summary));
                self.db.set(Some(db));
            }
            Err(e) => {
                log::error!("[HFD] failed to load patient data: {:#}", e);
                self.error_msg
                    .set(Some(format!("Failed to load patient data: {:#}", e)));
            }
        }
        self.loading.set(false);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Predictor-only state: the loaded model, the form, and the last result.
#[derive(Clone, Copy)]
pub struct PredictorState {
    pub classifier: Signal<Option<Classifier>>,
    pub form: Signal<PredictionForm>,
    /// Result text; `None` until Predict is first clicked
    pub result: Signal<Option<String>>,
}

impl PredictorState {
    pub fn new() -> Self {
        Self {
            classifier: Signal::new(None),
            form: Signal::new(PredictionForm::new()),
            result: Signal::new(None),
        }
    }
}

impl Default for PredictorState {
    fn default() -> Self {
        Self::new()
    }
}
