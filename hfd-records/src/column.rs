//! Column catalogue for the heart failure dataset.
//!
//! Every column has three names:
//! - the raw CSV header (`creatinine_phosphokinase`, `DEATH_EVENT`, ...)
//! - a stable snake_case key, used as SQL column name and dropdown value
//! - a display name shown in charts and selectors ("Creatine Phosphokinase")
//!
//! Parsing with [`FromStr`] accepts either the key or the display name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw CSV header of the outcome column.
pub const OUTCOME_HEADER: &str = "DEATH_EVENT";
/// SQL column name of the outcome column.
pub const OUTCOME_KEY: &str = "death_event";
/// Display name of the outcome column.
pub const OUTCOME_DISPLAY_NAME: &str = "Death Event";

/// A numeric clinical measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContinuousColumn {
    /// Age in years
    Age,
    /// Level of the CPK enzyme in the blood (mcg/L)
    CreatininePhosphokinase,
    /// Percentage of blood leaving the heart at each contraction
    EjectionFraction,
    /// Platelets in the blood (kiloplatelets/mL)
    Platelets,
    /// Level of serum creatinine in the blood (mg/dL)
    SerumCreatinine,
    /// Level of serum sodium in the blood (mEq/L)
    SerumSodium,
    /// Follow-up period in days
    #[serde(rename = "time")]
    FollowUpPeriod,
}

impl ContinuousColumn {
    /// All continuous columns in dropdown order.
    pub const ALL: [ContinuousColumn; 7] = [
        ContinuousColumn::Age,
        ContinuousColumn::CreatininePhosphokinase,
        ContinuousColumn::EjectionFraction,
        ContinuousColumn::Platelets,
        ContinuousColumn::SerumCreatinine,
        ContinuousColumn::SerumSodium,
        ContinuousColumn::FollowUpPeriod,
    ];

    /// Snake_case key; identical to the raw CSV header for these columns.
    pub fn key(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::CreatininePhosphokinase => "creatinine_phosphokinase",
            Self::EjectionFraction => "ejection_fraction",
            Self::Platelets => "platelets",
            Self::SerumCreatinine => "serum_creatinine",
            Self::SerumSodium => "serum_sodium",
            Self::FollowUpPeriod => "time",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::CreatininePhosphokinase => "Creatine Phosphokinase",
            Self::EjectionFraction => "Ejection Fraction",
            Self::Platelets => "Platelets",
            Self::SerumCreatinine => "Serum Creatinine",
            Self::SerumSodium => "Serum Sodium",
            Self::FollowUpPeriod => "Follow-up Period",
        }
    }
}

impl fmt::Display for ContinuousColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ContinuousColumn {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s) || c.display_name() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown continuous column: {}", s))
    }
}

/// A binary (0/1) clinical attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorColumn {
    Anaemia,
    Diabetes,
    HighBloodPressure,
    /// 1 = male, 0 = female
    Sex,
    Smoking,
}

impl IndicatorColumn {
    /// All indicator columns in dropdown order.
    pub const ALL: [IndicatorColumn; 5] = [
        IndicatorColumn::Anaemia,
        IndicatorColumn::Diabetes,
        IndicatorColumn::HighBloodPressure,
        IndicatorColumn::Sex,
        IndicatorColumn::Smoking,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Anaemia => "anaemia",
            Self::Diabetes => "diabetes",
            Self::HighBloodPressure => "high_blood_pressure",
            Self::Sex => "sex",
            Self::Smoking => "smoking",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Anaemia => "Anaemia",
            Self::Diabetes => "Diabetes",
            Self::HighBloodPressure => "High Blood Pressure",
            Self::Sex => "Sex",
            Self::Smoking => "Smoking",
        }
    }

    /// Human label for the value 1 in form dropdowns.
    pub fn positive_label(self) -> &'static str {
        match self {
            Self::Sex => "Male",
            _ => "Yes",
        }
    }

    /// Human label for the value 0 in form dropdowns.
    pub fn negative_label(self) -> &'static str {
        match self {
            Self::Sex => "Female",
            _ => "No",
        }
    }
}

impl fmt::Display for IndicatorColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for IndicatorColumn {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s) || c.display_name() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown indicator column: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuous_parses_key_and_display_name() {
        for column in ContinuousColumn::ALL {
            assert_eq!(column.key().parse::<ContinuousColumn>().unwrap(), column);
            assert_eq!(
                column.display_name().parse::<ContinuousColumn>().unwrap(),
                column
            );
        }
        assert_eq!(
            "Follow-up Period".parse::<ContinuousColumn>().unwrap(),
            ContinuousColumn::FollowUpPeriod
        );
        assert_eq!(
            "TIME".parse::<ContinuousColumn>().unwrap(),
            ContinuousColumn::FollowUpPeriod
        );
    }

    #[test]
    fn indicator_parses_key_and_display_name() {
        for column in IndicatorColumn::ALL {
            assert_eq!(column.key().parse::<IndicatorColumn>().unwrap(), column);
            assert_eq!(
                column.display_name().parse::<IndicatorColumn>().unwrap(),
                column
            );
        }
    }

    #[test]
    fn unknown_columns_are_rejected() {
        assert!("Cholesterol".parse::<ContinuousColumn>().is_err());
        assert!("Sex".parse::<ContinuousColumn>().is_err());
        assert!("Age".parse::<IndicatorColumn>().is_err());
        assert!("".parse::<IndicatorColumn>().is_err());
    }

    #[test]
    fn catalogue_sizes() {
        assert_eq!(ContinuousColumn::ALL.len(), 7);
        assert_eq!(IndicatorColumn::ALL.len(), 5);
    }

    #[test]
    fn display_uses_renamed_headers() {
        assert_eq!(
            ContinuousColumn::CreatininePhosphokinase.to_string(),
            "Creatine Phosphokinase"
        );
        assert_eq!(
            IndicatorColumn::HighBloodPressure.to_string(),
            "High Blood Pressure"
        );
    }

    #[test]
    fn serde_uses_keys() {
        let json = serde_json::to_string(&ContinuousColumn::FollowUpPeriod).unwrap();
        assert_eq!(json, "\"time\"");
        let json = serde_json::to_string(&IndicatorColumn::HighBloodPressure).unwrap();
        assert_eq!(json, "\"high_blood_pressure\"");
    }
}
