//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use hfd_records::{ContinuousColumn, IndicatorColumn, Outcome};
use serde::Serialize;

/// One histogram bar: a bin of a continuous column within one outcome group.
///
/// Both outcome groups share the same bin edges so bars line up.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DistributionBin {
    pub outcome: Outcome,
    /// 0-based bin position, left to right.
    pub bin_index: usize,
    pub bin_start: f64,
    pub bin_end: f64,
    pub count: u32,
    /// `count / (bin_end - bin_start)`
    pub density: f64,
}

/// One pie slice of the indicator-by-outcome breakdown.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BreakdownSlice {
    /// Derived category, e.g. "No Death with Diabetes".
    pub label: String,
    /// Whether the indicator is set (1) for this category.
    pub indicator: bool,
    pub outcome: Outcome,
    pub count: i64,
    /// Fraction of all patients in this category (0.0 when the table is empty).
    pub share: f64,
}

/// A single patient plotted against two continuous columns.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterPoint {
    pub patient_id: i64,
    pub x: f64,
    pub y: f64,
    pub outcome: Outcome,
}

/// Mean of a continuous column within each outcome group.
///
/// A group with no patients has no mean.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GroupMean {
    pub column: ContinuousColumn,
    pub survival_mean: Option<f64>,
    pub death_mean: Option<f64>,
}

/// Global minimum and maximum of a continuous column.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColumnBounds {
    pub column: ContinuousColumn,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Number of patients per outcome.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutcomeCount {
    pub outcome: Outcome,
    pub count: i64,
}

/// Descriptive label for one of the four indicator-by-outcome categories.
pub fn breakdown_label(column: IndicatorColumn, indicator: bool, outcome: Outcome) -> String {
    let prefix = match outcome {
        Outcome::Death => "Death",
        Outcome::Survival => "No Death",
    };
    let joiner = if indicator { "with" } else { "without" };
    format!("{} {} {}", prefix, joiner, column.display_name())
}
