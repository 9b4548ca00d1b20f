//! The three exploration cards plus the summary table, shared by both apps.
//!
//! Each chart has its own `use_effect` that reads only its own selection
//! signal(s) and the loaded database, calls one pure view function, and
//! hands the payload to the matching D3.js renderer. Changing one dropdown
//! therefore re-runs exactly one view.

use super::{Card, ChartContainer, ColumnSelector, ColumnTarget, IndicatorSelector};
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use hfd_db::Database;
use hfd_views::{breakdown_view, distribution_view, relationship_view, summary_view, ChartPayload};

pub const DISTRIBUTION_CHART_ID: &str = "distribution-chart";
pub const BREAKDOWN_CHART_ID: &str = "breakdown-chart";
pub const SCATTER_CHART_ID: &str = "scatter-chart";
pub const SUMMARY_TABLE_ID: &str = "summary-table";

/// The loaded database, or `None` while loading or after a load failure.
fn loaded_db(state: &AppState) -> Option<Database> {
    if (state.loading)() || (state.error_msg)().is_some() {
        return None;
    }
    state.db.read().clone()
}

/// Render a view result, or clear the chart and log when the view failed.
fn render(
    container_id: &str,
    payload: anyhow::Result<ChartPayload>,
    renderer: fn(&str, &ChartPayload),
) {
    match payload {
        Ok(payload) => renderer(container_id, &payload),
        Err(e) => {
            log::error!("[HFD] {} view failed: {:#}", container_id, e);
            js_bridge::destroy_chart(container_id);
        }
    }
}

#[component]
pub fn DashboardCharts() -> Element {
    let state = use_context::<AppState>();

    use_effect(move || {
        let Some(db) = loaded_db(&state) else { return };
        let column = (state.distribution_column)();
        js_bridge::init_charts();
        render(
            DISTRIBUTION_CHART_ID,
            distribution_view(&db, column),
            js_bridge::render_histogram_chart,
        );
    });

    use_effect(move || {
        let Some(db) = loaded_db(&state) else { return };
        let column = (state.breakdown_column)();
        js_bridge::init_charts();
        render(
            BREAKDOWN_CHART_ID,
            breakdown_view(&db, column),
            js_bridge::render_pie_chart,
        );
    });

    use_effect(move || {
        let Some(db) = loaded_db(&state) else { return };
        let x = (state.scatter_x)();
        let y = (state.scatter_y)();
        js_bridge::init_charts();
        render(
            SCATTER_CHART_ID,
            relationship_view(&db, x, y),
            js_bridge::render_scatter_chart,
        );
    });

    // Summary table: computed once at load, rendered once.
    use_effect(move || {
        let Some(summary) = state.summary.read().clone() else { return };
        js_bridge::init_charts();
        render(
            SUMMARY_TABLE_ID,
            summary_view(&summary),
            js_bridge::render_data_table,
        );
    });

    let survival_note = state
        .summary
        .read()
        .as_ref()
        .and_then(|s| s.survival_rate().map(|rate| (rate, s.patient_count)))
        .map(|(rate, n)| format!("Overall survival rate: {:.1}% of {} patients", rate * 100.0, n))
        .unwrap_or_default();

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 16px;",
            div {
                style: "flex: 1 1 420px; min-width: 320px;",
                Card {
                    title: "Select a Feature for Distribution:".to_string(),
                    ColumnSelector {
                        id: "distribution-select".to_string(),
                        label: "Feature: ".to_string(),
                        target: ColumnTarget::Distribution,
                    }
                    ChartContainer { id: DISTRIBUTION_CHART_ID.to_string() }
                }
            }
            div {
                style: "flex: 1 1 420px; min-width: 320px;",
                Card {
                    title: "Survival Rate and Categorical Breakdown:".to_string(),
                    if !survival_note.is_empty() {
                        p {
                            style: "margin: 0 0 4px 0; font-size: 13px; color: #444;",
                            "{survival_note}"
                        }
                    }
                    IndicatorSelector {}
                    ChartContainer { id: BREAKDOWN_CHART_ID.to_string() }
                }
            }
            div {
                style: "flex: 1 1 420px; min-width: 320px;",
                Card {
                    title: "Select X-axis and Y-axis for Scatter Plot:".to_string(),
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 12px;",
                        ColumnSelector {
                            id: "scatter-x-select".to_string(),
                            label: "X-axis: ".to_string(),
                            target: ColumnTarget::ScatterX,
                        }
                        ColumnSelector {
                            id: "scatter-y-select".to_string(),
                            label: "Y-axis: ".to_string(),
                            target: ColumnTarget::ScatterY,
                        }
                    }
                    ChartContainer { id: SCATTER_CHART_ID.to_string() }
                }
            }
        }
        Card {
            title: "Summary Statistics".to_string(),
            ChartContainer { id: SUMMARY_TABLE_ID.to_string(), min_height: 120 }
        }
    }
}
