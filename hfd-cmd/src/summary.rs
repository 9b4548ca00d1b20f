//! Summarise a patient records CSV on the command line.

use anyhow::Context;
use hfd_db::Database;
use hfd_records::Outcome;
use hfd_views::DatasetSummary;
use std::fmt::{self, Write};

/// Load `dataset` into an in-memory store and print its summary.
pub fn run_summary(dataset: &str, as_csv: bool) -> anyhow::Result<()> {
    let csv_data = std::fs::read_to_string(dataset)
        .with_context(|| format!("Failed to read dataset {}", dataset))?;

    let db = Database::new()?;
    db.load_patients(&csv_data)?;
    let summary = DatasetSummary::compute(&db)?;

    if as_csv {
        print!("{}", summary_csv(&summary)?);
    } else {
        print!("{}", format_summary(&summary)?);
    }
    Ok(())
}

fn cell(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| "-".to_string())
}

/// Human-readable counts followed by an aligned summary table.
pub fn format_summary(summary: &DatasetSummary) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Patients: {}", summary.patient_count)?;
    for outcome in Outcome::ALL {
        let count = summary.count(outcome);
        if summary.patient_count > 0 {
            let pct = 100.0 * count as f64 / summary.patient_count as f64;
            writeln!(out, "{}: {} ({:.1}%)", outcome, count, pct)?;
        } else {
            writeln!(out, "{}: {}", outcome, count)?;
        }
    }
    out.push('\n');

    writeln!(
        out,
        "{:<26}{:>16}{:>16}{:>12}{:>12}",
        "Column", "Mean (Survival)", "Mean (Death)", "Min", "Max"
    )?;
    for row in summary.rows() {
        writeln!(
            out,
            "{:<26}{:>16}{:>16}{:>12}{:>12}",
            row.column,
            cell(row.survival_mean),
            cell(row.death_mean),
            cell(row.min),
            cell(row.max)
        )?;
    }
    Ok(out)
}

/// The summary table as CSV; empty groups leave empty cells.
pub fn summary_csv(summary: &DatasetSummary) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in summary.rows() {
        writer.serialize(&row)?;
    }
    let bytes = writer.into_inner().context("Failed to flush summary CSV")?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
age,anaemia,creatinine_phosphokinase,diabetes,ejection_fraction,high_blood_pressure,platelets,serum_creatinine,serum_sodium,sex,smoking,time,DEATH_EVENT
75,0,582,0,20,1,265000,1.9,130,1,0,4,1
50,1,111,0,60,0,210000,0.9,137,1,0,180,0
60,0,200,1,40,0,250000,1.1,139,0,1,120,0
";

    fn summary() -> DatasetSummary {
        let db = Database::new().unwrap();
        db.load_patients(CSV).unwrap();
        DatasetSummary::compute(&db).unwrap()
    }

    #[test]
    fn text_summary_counts_and_rows() {
        let text = format_summary(&summary()).unwrap();
        assert!(text.starts_with("Patients: 3\n"));
        assert!(text.contains("Survival: 2 (66.7%)"));
        assert!(text.contains("Death: 1 (33.3%)"));
        // header + 7 columns after the blank line
        let table: Vec<&str> = text.split("\n\n").nth(1).unwrap().lines().collect();
        assert_eq!(table.len(), 8);
        assert!(table[1].starts_with("Age"));
        assert!(table[1].contains("55.00"));
        assert!(table[1].contains("75.00"));
    }

    #[test]
    fn csv_summary_has_header_and_seven_rows() {
        let out = summary_csv(&summary()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "column,survival_mean,death_mean,min,max");
        assert_eq!(lines.len(), 8);
        assert!(lines[7].starts_with("Follow-up Period,"));
    }

    #[test]
    fn empty_dataset_prints_dashes() {
        let db = Database::new().unwrap();
        let text = format_summary(&DatasetSummary::compute(&db).unwrap()).unwrap();
        assert!(text.starts_with("Patients: 0\n"));
        assert!(text.contains("Death: 0\n"));
        assert!(text.contains(" -"));
    }
}
