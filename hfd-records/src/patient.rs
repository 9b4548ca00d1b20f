use crate::column::{ContinuousColumn, IndicatorColumn};
use crate::outcome::Outcome;
use anyhow::Context;
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};

/// One row of the heart failure clinical records dataset.
///
/// Field names follow the raw CSV headers so rows deserialize by header
/// name regardless of column order. Indicator and outcome fields hold 0/1.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    pub age: f64,
    pub anaemia: u8,
    pub creatinine_phosphokinase: f64,
    pub diabetes: u8,
    pub ejection_fraction: f64,
    pub high_blood_pressure: u8,
    pub platelets: f64,
    pub serum_creatinine: f64,
    pub serum_sodium: f64,
    pub sex: u8,
    pub smoking: u8,
    /// Follow-up period in days
    pub time: f64,
    #[serde(rename = "DEATH_EVENT")]
    pub death_event: u8,
}

impl PatientRecord {
    /// Value of a continuous column for this patient.
    pub fn value(&self, column: ContinuousColumn) -> f64 {
        match column {
            ContinuousColumn::Age => self.age,
            ContinuousColumn::CreatininePhosphokinase => self.creatinine_phosphokinase,
            ContinuousColumn::EjectionFraction => self.ejection_fraction,
            ContinuousColumn::Platelets => self.platelets,
            ContinuousColumn::SerumCreatinine => self.serum_creatinine,
            ContinuousColumn::SerumSodium => self.serum_sodium,
            ContinuousColumn::FollowUpPeriod => self.time,
        }
    }

    /// Raw 0/1 value of an indicator column.
    pub fn flag(&self, column: IndicatorColumn) -> u8 {
        match column {
            IndicatorColumn::Anaemia => self.anaemia,
            IndicatorColumn::Diabetes => self.diabetes,
            IndicatorColumn::HighBloodPressure => self.high_blood_pressure,
            IndicatorColumn::Sex => self.sex,
            IndicatorColumn::Smoking => self.smoking,
        }
    }

    /// Outcome label. Rows produced by [`parse_patient_csv`] always hold 0 or 1.
    pub fn outcome(&self) -> Outcome {
        if self.death_event == 1 {
            Outcome::Death
        } else {
            Outcome::Survival
        }
    }

    fn check(&self) -> anyhow::Result<()> {
        for column in IndicatorColumn::ALL {
            let v = self.flag(column);
            if v > 1 {
                anyhow::bail!("{} must be 0 or 1, got {}", column.key(), v);
            }
        }
        if self.death_event > 1 {
            anyhow::bail!("DEATH_EVENT must be 0 or 1, got {}", self.death_event);
        }
        for column in ContinuousColumn::ALL {
            let v = self.value(column);
            if !v.is_finite() {
                anyhow::bail!("{} must be a finite number, got {}", column.key(), v);
            }
        }
        Ok(())
    }
}

/// Parse the dataset CSV (with headers) into patient records.
///
/// Expected headers (any order):
/// `age,anaemia,creatinine_phosphokinase,diabetes,ejection_fraction,high_blood_pressure,platelets,serum_creatinine,serum_sodium,sex,smoking,time,DEATH_EVENT`
///
/// A malformed row is an error naming its line number.
pub fn parse_patient_csv(csv_data: &str) -> anyhow::Result<Vec<PatientRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(csv_data.as_bytes());

    let mut patients = Vec::new();
    for (idx, result) in rdr.deserialize::<PatientRecord>().enumerate() {
        // +2: one for the header row, one for 1-based lines
        let line = idx + 2;
        let record = result.with_context(|| format!("Malformed patient row at line {}", line))?;
        record
            .check()
            .with_context(|| format!("Invalid patient row at line {}", line))?;
        patients.push(record);
    }
    log::info!("[HFD] records: parsed {} patients", patients.len());
    Ok(patients)
}
