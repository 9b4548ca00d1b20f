//! Typed query methods over the patient table.
//!
//! Column names interpolated into SQL always come from
//! [`ContinuousColumn::key`] / [`IndicatorColumn::key`], which are fixed
//! identifiers, so no user text ever reaches a statement.

use crate::models::{
    breakdown_label, BreakdownSlice, ColumnBounds, DistributionBin, GroupMean, OutcomeCount,
    ScatterPoint,
};
use crate::Database;
use hfd_records::{ContinuousColumn, IndicatorColumn, Outcome};

/// Histogram bin count used by the distribution view.
pub const DISTRIBUTION_BINS: usize = 11;

/// The four breakdown categories in display order: (indicator set, outcome).
const BREAKDOWN_CATEGORIES: [(bool, Outcome); 4] = [
    (true, Outcome::Death),
    (true, Outcome::Survival),
    (false, Outcome::Death),
    (false, Outcome::Survival),
];

/// Convert a stored 0/1 label into an [`Outcome`], rejecting anything else.
fn outcome_at(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<Outcome> {
    let label: i64 = row.get(idx)?;
    u8::try_from(label)
        .ok()
        .and_then(Outcome::from_label)
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, label))
}

impl Database {
    /// Total number of patients loaded.
    pub fn query_patient_count(&self) -> anyhow::Result<i64> {
        let conn = self.conn.borrow();
        let count = conn.query_row("SELECT COUNT(*) FROM patients", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Patient count per outcome. Both outcomes are always present.
    pub fn query_outcome_counts(&self) -> anyhow::Result<Vec<OutcomeCount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT death_event, COUNT(*) FROM patients
             GROUP BY death_event",
        )?;
        let found = stmt
            .query_map([], |row| Ok((outcome_at(row, 0)?, row.get::<_, i64>(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        let rows: Vec<OutcomeCount> = Outcome::ALL
            .into_iter()
            .map(|outcome| OutcomeCount {
                outcome,
                count: found
                    .iter()
                    .find(|(o, _)| *o == outcome)
                    .map(|(_, c)| *c)
                    .unwrap_or(0),
            })
            .collect();
        log::info!(
            "[HFD] query: query_outcome_counts returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Every value of one continuous column with its patient's outcome, in load order.
    pub fn query_column_values(
        &self,
        column: ContinuousColumn,
    ) -> anyhow::Result<Vec<(f64, Outcome)>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {}, death_event FROM patients ORDER BY id",
            column.key()
        ))?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, f64>(0)?, outcome_at(row, 1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Histogram of a continuous column split by outcome.
    ///
    /// See [`bin_values`] for the binning rules.
    pub fn query_distribution(
        &self,
        column: ContinuousColumn,
        bins: usize,
    ) -> anyhow::Result<Vec<DistributionBin>> {
        let values = self.query_column_values(column)?;
        let rows = bin_values(&values, bins)?;
        log::info!(
            "[HFD] query: query_distribution({}) returned {} records",
            column.key(),
            rows.len()
        );
        Ok(rows)
    }

    /// Four-way breakdown of an indicator crossed with the outcome.
    ///
    /// The category is derived per row in SQL; the result always holds the
    /// four categories in fixed order, including empty ones.
    pub fn query_breakdown(&self, column: IndicatorColumn) -> anyhow::Result<Vec<BreakdownSlice>> {
        let conn = self.conn.borrow();
        let key = column.key();
        let mut stmt = conn.prepare(&format!(
            "SELECT CASE
                 WHEN death_event = 1 AND {key} = 1 THEN 0
                 WHEN death_event = 0 AND {key} = 1 THEN 1
                 WHEN death_event = 1 AND {key} = 0 THEN 2
                 ELSE 3
             END AS category, COUNT(*)
             FROM patients
             GROUP BY category",
        ))?;
        let found = stmt
            .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        let mut counts = [0i64; 4];
        for (category, count) in found {
            if let Some(slot) = usize::try_from(category).ok().and_then(|c| counts.get_mut(c)) {
                *slot = count;
            }
        }
        let total: i64 = counts.iter().sum();

        let rows: Vec<BreakdownSlice> = BREAKDOWN_CATEGORIES
            .iter()
            .zip(counts)
            .map(|(&(indicator, outcome), count)| BreakdownSlice {
                label: breakdown_label(column, indicator, outcome),
                indicator,
                outcome,
                count,
                share: if total > 0 {
                    count as f64 / total as f64
                } else {
                    0.0
                },
            })
            .collect();
        log::info!(
            "[HFD] query: query_breakdown({}) returned {} records",
            key,
            rows.len()
        );
        Ok(rows)
    }

    /// One point per patient for two continuous columns, in load order.
    ///
    /// `x` and `y` may be the same column.
    pub fn query_scatter(
        &self,
        x: ContinuousColumn,
        y: ContinuousColumn,
    ) -> anyhow::Result<Vec<ScatterPoint>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT id, {}, {}, death_event FROM patients ORDER BY id",
            x.key(),
            y.key()
        ))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(ScatterPoint {
                    patient_id: row.get(0)?,
                    x: row.get(1)?,
                    y: row.get(2)?,
                    outcome: outcome_at(row, 3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[HFD] query: query_scatter({}, {}) returned {} records",
            x.key(),
            y.key(),
            rows.len()
        );
        Ok(rows)
    }

    /// Per-outcome means of every continuous column, in catalogue order.
    pub fn query_group_means(&self) -> anyhow::Result<Vec<GroupMean>> {
        let conn = self.conn.borrow();
        let averages = ContinuousColumn::ALL
            .iter()
            .map(|c| format!("AVG({})", c.key()))
            .collect::<Vec<_>>()
            .join(", ");
        let mut stmt = conn.prepare(&format!(
            "SELECT death_event, {} FROM patients GROUP BY death_event",
            averages
        ))?;

        let mut survival = [None; 7];
        let mut death = [None; 7];
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let target = match outcome_at(row, 0)? {
                Outcome::Survival => &mut survival,
                Outcome::Death => &mut death,
            };
            for (i, slot) in target.iter_mut().enumerate() {
                *slot = row.get::<_, Option<f64>>(i + 1)?;
            }
        }

        let means: Vec<GroupMean> = ContinuousColumn::ALL
            .into_iter()
            .enumerate()
            .map(|(i, column)| GroupMean {
                column,
                survival_mean: survival[i],
                death_mean: death[i],
            })
            .collect();
        log::info!(
            "[HFD] query: query_group_means returned {} records",
            means.len()
        );
        Ok(means)
    }

    /// Global min/max of every continuous column, in catalogue order.
    ///
    /// Both bounds are `None` when the table is empty.
    pub fn query_column_bounds(&self) -> anyhow::Result<Vec<ColumnBounds>> {
        let conn = self.conn.borrow();
        let selects = ContinuousColumn::ALL
            .iter()
            .map(|c| format!("MIN({0}), MAX({0})", c.key()))
            .collect::<Vec<_>>()
            .join(", ");
        let bounds = conn.query_row(&format!("SELECT {} FROM patients", selects), [], |row| {
            ContinuousColumn::ALL
                .into_iter()
                .enumerate()
                .map(|(i, column)| {
                    Ok(ColumnBounds {
                        column,
                        min: row.get(2 * i)?,
                        max: row.get(2 * i + 1)?,
                    })
                })
                .collect::<rusqlite::Result<Vec<_>>>()
        })?;
        log::info!(
            "[HFD] query: query_column_bounds returned {} records",
            bounds.len()
        );
        Ok(bounds)
    }
}

/// Bin `(value, outcome)` pairs into `bins` equal-width bins per outcome.
///
/// - Edges span the global `[min, max]` of all values; both outcome groups
///   share them.
/// - The last bin is closed on the right so `max` is counted.
/// - If every value is equal, the edges span `[v - 0.5, v + 0.5]`.
/// - `density = count / bin_width`.
///
/// Returns all Survival bins followed by all Death bins (zero counts
/// included), or nothing when `values` is empty.
pub fn bin_values(values: &[(f64, Outcome)], bins: usize) -> anyhow::Result<Vec<DistributionBin>> {
    anyhow::ensure!(bins > 0, "Histogram bin count must be positive");
    if values.is_empty() {
        return Ok(Vec::new());
    }

    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (v, _)| {
            (lo.min(*v), hi.max(*v))
        });
    let (start, end) = if max > min {
        (min, max)
    } else {
        (min - 0.5, max + 0.5)
    };
    let width = (end - start) / bins as f64;

    let mut counts = vec![[0u32; 2]; bins];
    for (value, outcome) in values {
        let idx = (((value - start) / width).floor() as usize).min(bins - 1);
        counts[idx][outcome.label() as usize] += 1;
    }

    let mut rows = Vec::with_capacity(bins * 2);
    for outcome in Outcome::ALL {
        for (i, bin_counts) in counts.iter().enumerate() {
            let bin_start = start + width * i as f64;
            let bin_end = if i + 1 == bins {
                end
            } else {
                start + width * (i + 1) as f64
            };
            let count = bin_counts[outcome.label() as usize];
            rows.push(DistributionBin {
                outcome,
                bin_index: i,
                bin_start,
                bin_end,
                count,
                density: count as f64 / width,
            });
        }
    }
    Ok(rows)
}
