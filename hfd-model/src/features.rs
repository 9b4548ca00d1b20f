//! Model inputs and their fixed order.

use hfd_records::{ContinuousColumn, IndicatorColumn};
use serde::Serialize;
use std::fmt;

/// Number of model inputs.
pub const NUM_FEATURES: usize = 12;

/// Whether a feature is a free numeric value or a 0/1 choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Numeric,
    Binary,
}

/// One model input: every dataset column except the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Feature {
    Continuous(ContinuousColumn),
    Indicator(IndicatorColumn),
}

impl Feature {
    /// Input order expected by the classifier: the dataset's column order
    /// with `DEATH_EVENT` dropped.
    pub const ORDER: [Feature; NUM_FEATURES] = [
        Feature::Continuous(ContinuousColumn::Age),
        Feature::Indicator(IndicatorColumn::Anaemia),
        Feature::Continuous(ContinuousColumn::CreatininePhosphokinase),
        Feature::Indicator(IndicatorColumn::Diabetes),
        Feature::Continuous(ContinuousColumn::EjectionFraction),
        Feature::Indicator(IndicatorColumn::HighBloodPressure),
        Feature::Continuous(ContinuousColumn::Platelets),
        Feature::Continuous(ContinuousColumn::SerumCreatinine),
        Feature::Continuous(ContinuousColumn::SerumSodium),
        Feature::Indicator(IndicatorColumn::Sex),
        Feature::Indicator(IndicatorColumn::Smoking),
        Feature::Continuous(ContinuousColumn::FollowUpPeriod),
    ];

    /// Position in [`Feature::ORDER`].
    pub fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|f| *f == self)
            .unwrap_or_default()
    }

    /// Raw dataset header, as stored in the classifier's `feature_names`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Continuous(c) => c.key(),
            Self::Indicator(c) => c.key(),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Continuous(c) => c.display_name(),
            Self::Indicator(c) => c.display_name(),
        }
    }

    pub fn kind(self) -> FeatureKind {
        match self {
            Self::Continuous(_) => FeatureKind::Numeric,
            Self::Indicator(_) => FeatureKind::Binary,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A complete, ordered model input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector(pub [f64; NUM_FEATURES]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_matches_dataset_headers() {
        let names: Vec<&str> = Feature::ORDER.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec![
                "age",
                "anaemia",
                "creatinine_phosphokinase",
                "diabetes",
                "ejection_fraction",
                "high_blood_pressure",
                "platelets",
                "serum_creatinine",
                "serum_sodium",
                "sex",
                "smoking",
                "time",
            ]
        );
    }

    #[test]
    fn seven_numeric_five_binary() {
        let numeric = Feature::ORDER
            .iter()
            .filter(|f| f.kind() == FeatureKind::Numeric)
            .count();
        assert_eq!(numeric, 7);
        assert_eq!(NUM_FEATURES - numeric, 5);
    }

    #[test]
    fn index_is_position() {
        for (i, feature) in Feature::ORDER.into_iter().enumerate() {
            assert_eq!(feature.index(), i);
        }
    }

    #[test]
    fn vector_indexed_by_feature() {
        let v = FeatureVector([75.0, 0.0, 582.0, 0.0, 20.0, 1.0, 265000.0, 1.9, 130.0, 1.0, 0.0, 4.0]);
        assert_eq!(v.0[Feature::Indicator(IndicatorColumn::Sex).index()], 1.0);
        assert_eq!(v.0[Feature::Continuous(ContinuousColumn::FollowUpPeriod).index()], 4.0);
        assert_eq!(v.as_slice().len(), NUM_FEATURES);
    }
}
