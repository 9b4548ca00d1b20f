//! Aggregates computed once at load time and the summary table built from them.

use crate::ChartPayload;
use hfd_db::models::{ColumnBounds, GroupMean, OutcomeCount};
use hfd_db::Database;
use hfd_records::{ContinuousColumn, Outcome};
use serde::Serialize;
use serde_json::json;

/// Everything the dashboards derive from the dataset up front: counts,
/// per-outcome means, and per-column bounds.
///
/// Never recomputed per request; the bounds parameterise the predictor's
/// input hints and the means fill the summary table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub patient_count: i64,
    pub outcome_counts: Vec<OutcomeCount>,
    pub group_means: Vec<GroupMean>,
    pub column_bounds: Vec<ColumnBounds>,
}

/// One row of the summary table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub column: String,
    pub survival_mean: Option<f64>,
    pub death_mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl DatasetSummary {
    pub fn compute(db: &Database) -> anyhow::Result<Self> {
        let summary = Self {
            patient_count: db.query_patient_count()?,
            outcome_counts: db.query_outcome_counts()?,
            group_means: db.query_group_means()?,
            column_bounds: db.query_column_bounds()?,
        };
        log::info!(
            "[HFD] views: summary computed for {} patients",
            summary.patient_count
        );
        Ok(summary)
    }

    pub fn bounds(&self, column: ContinuousColumn) -> Option<&ColumnBounds> {
        self.column_bounds.iter().find(|b| b.column == column)
    }

    pub fn count(&self, outcome: Outcome) -> i64 {
        self.outcome_counts
            .iter()
            .find(|c| c.outcome == outcome)
            .map(|c| c.count)
            .unwrap_or(0)
    }

    /// Share of patients who survived, or `None` for an empty dataset.
    pub fn survival_rate(&self) -> Option<f64> {
        (self.patient_count > 0)
            .then(|| self.count(Outcome::Survival) as f64 / self.patient_count as f64)
    }

    /// Table rows in catalogue order.
    pub fn rows(&self) -> Vec<SummaryRow> {
        ContinuousColumn::ALL
            .into_iter()
            .map(|column| {
                let mean = self.group_means.iter().find(|m| m.column == column);
                let bounds = self.bounds(column);
                SummaryRow {
                    column: column.display_name().to_string(),
                    survival_mean: mean.and_then(|m| m.survival_mean),
                    death_mean: mean.and_then(|m| m.death_mean),
                    min: bounds.and_then(|b| b.min),
                    max: bounds.and_then(|b| b.max),
                }
            })
            .collect()
    }
}

/// Summary table payload for the D3.js data table.
pub fn summary_view(summary: &DatasetSummary) -> anyhow::Result<ChartPayload> {
    ChartPayload::new(
        &summary.rows(),
        json!({
            "title": format!(
                "Clinical Measurements by Outcome ({} patients)",
                summary.patient_count
            ),
            "columns": [
                {"key": "column", "label": "Measurement", "sortable": false, "type": "text"},
                {"key": "survival_mean", "label": "Mean (Survival)", "sortable": true, "type": "number", "format": "fixed2"},
                {"key": "death_mean", "label": "Mean (Death)", "sortable": true, "type": "number", "format": "fixed2"},
                {"key": "min", "label": "Min", "sortable": true, "type": "number", "format": "comma"},
                {"key": "max", "label": "Max", "sortable": true, "type": "number", "format": "comma"},
            ],
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::sample_db;

    #[test]
    fn compute_summary() {
        let summary = DatasetSummary::compute(&sample_db()).unwrap();
        assert_eq!(summary.patient_count, 5);
        assert_eq!(summary.count(Outcome::Death), 3);
        assert_eq!(summary.count(Outcome::Survival), 2);
        assert!((summary.survival_rate().unwrap() - 0.4).abs() < 1e-12);

        let ef = summary.bounds(ContinuousColumn::EjectionFraction).unwrap();
        assert_eq!(ef.min, Some(20.0));
        assert_eq!(ef.max, Some(60.0));
    }

    #[test]
    fn rows_in_catalogue_order() {
        let summary = DatasetSummary::compute(&sample_db()).unwrap();
        let rows = summary.rows();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].column, "Age");
        assert_eq!(rows[6].column, "Follow-up Period");
        // Survivors: 50, 45
        assert!((rows[0].survival_mean.unwrap() - 47.5).abs() < 1e-9);
    }

    #[test]
    fn empty_dataset_summary() {
        let summary = DatasetSummary::compute(&Database::new().unwrap()).unwrap();
        assert_eq!(summary.patient_count, 0);
        assert!(summary.survival_rate().is_none());
        let payload = summary_view(&summary).unwrap();
        let data: serde_json::Value = serde_json::from_str(&payload.data_json).unwrap();
        assert_eq!(data.as_array().unwrap().len(), 7);
        assert!(data[0]["survival_mean"].is_null());
    }
}
