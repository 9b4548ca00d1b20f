//! Reusable Dioxus RSX components for the heart failure dashboards.

mod card;
mod chart_container;
mod chart_header;
mod column_selector;
mod dashboard;
mod error_display;
mod indicator_selector;
mod loading_spinner;
mod predictor_form;

pub use card::Card;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use column_selector::{ColumnSelector, ColumnTarget};
pub use dashboard::DashboardCharts;
pub use error_display::ErrorDisplay;
pub use indicator_selector::IndicatorSelector;
pub use loading_spinner::LoadingSpinner;
pub use predictor_form::PredictorForm;
