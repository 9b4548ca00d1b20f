//! The predictor form: twelve fields, any of which may still be unset.

use crate::classifier::Classifier;
use crate::features::{Feature, FeatureKind, FeatureVector, NUM_FEATURES};
use hfd_records::Outcome;
use serde::Serialize;
use std::fmt;

/// Shown instead of a prediction while any field is unset.
pub const COMPLETE_FORM_PROMPT: &str = "Please fill in all fields to get a prediction.";

/// Manually entered patient attributes, indexed by [`Feature::ORDER`].
///
/// Values are never checked against the dataset's min/max; only emptiness
/// (and, for binary fields, being 0 or 1) matters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PredictionForm {
    values: [Option<f64>; NUM_FEATURES],
}

impl PredictionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, feature: Feature) -> Option<f64> {
        self.values[feature.index()]
    }

    /// Set or clear a field. Non-finite numbers, and binary values other
    /// than 0 or 1, clear the field.
    pub fn set(&mut self, feature: Feature, value: Option<f64>) {
        let value = value.filter(|v| match feature.kind() {
            FeatureKind::Numeric => v.is_finite(),
            FeatureKind::Binary => *v == 0.0 || *v == 1.0,
        });
        self.values[feature.index()] = value;
    }

    /// Set a field from raw input text. Empty or unparsable text clears it.
    pub fn set_text(&mut self, feature: Feature, text: &str) {
        self.set(feature, text.trim().parse::<f64>().ok());
    }

    /// Builder-style [`PredictionForm::set`].
    pub fn with(mut self, feature: Feature, value: f64) -> Self {
        self.set(feature, Some(value));
        self
    }

    /// Fields still unset, in model order.
    pub fn missing(&self) -> Vec<Feature> {
        Feature::ORDER
            .into_iter()
            .filter(|f| self.get(*f).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// The ordered model input, or `None` while any field is unset.
    pub fn to_feature_vector(&self) -> Option<FeatureVector> {
        let mut out = [0.0; NUM_FEATURES];
        for (slot, value) in out.iter_mut().zip(self.values) {
            *slot = value?;
        }
        Some(FeatureVector(out))
    }
}

/// Result of submitting the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction {
    /// At least one field was unset; no prediction was made.
    Incomplete,
    Predicted(Outcome),
}

impl Prediction {
    /// The text shown to the user: the completion prompt or the outcome label.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Incomplete => COMPLETE_FORM_PROMPT,
            Self::Predicted(outcome) => outcome.as_str(),
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Assemble the form into a feature vector and run the classifier on it.
pub fn predict_from_form(form: &PredictionForm, classifier: &Classifier) -> Prediction {
    match form.to_feature_vector() {
        Some(x) => {
            let outcome = classifier.predict(&x);
            log::info!("[HFD] model: predicted {}", outcome);
            Prediction::Predicted(outcome)
        }
        None => {
            log::info!(
                "[HFD] model: form incomplete, {} fields missing",
                form.missing().len()
            );
            Prediction::Incomplete
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::load_classifier;
    use hfd_records::{ContinuousColumn, IndicatorColumn};

    const AGE: Feature = Feature::Continuous(ContinuousColumn::Age);
    const SEX: Feature = Feature::Indicator(IndicatorColumn::Sex);
    const TIME: Feature = Feature::Continuous(ContinuousColumn::FollowUpPeriod);

    fn classifier() -> Classifier {
        load_classifier(
            r#"{
                "kind": "logistic_regression",
                "feature_names": ["age","anaemia","creatinine_phosphokinase","diabetes","ejection_fraction","high_blood_pressure","platelets","serum_creatinine","serum_sodium","sex","smoking","time"],
                "coefficients": [0,0,0,0,0,0,0,0,0,0,0,-0.1],
                "intercept": 10
            }"#,
        )
        .unwrap()
    }

    fn full_form(time: f64) -> PredictionForm {
        Feature::ORDER
            .into_iter()
            .fold(PredictionForm::new(), |form, f| match f.kind() {
                FeatureKind::Numeric => form.with(f, 1.0),
                FeatureKind::Binary => form.with(f, 0.0),
            })
            .with(TIME, time)
    }

    #[test]
    fn empty_form_returns_prompt() {
        let prediction = predict_from_form(&PredictionForm::new(), &classifier());
        assert_eq!(prediction, Prediction::Incomplete);
        assert_eq!(prediction.to_string(), COMPLETE_FORM_PROMPT);
    }

    #[test]
    fn any_single_unset_field_returns_prompt() {
        let model = classifier();
        for feature in Feature::ORDER {
            let mut form = full_form(50.0);
            form.set(feature, None);
            assert_eq!(form.missing(), vec![feature]);
            assert_eq!(
                predict_from_form(&form, &model).message(),
                COMPLETE_FORM_PROMPT,
                "{}",
                feature
            );
        }
    }

    #[test]
    fn complete_form_returns_an_outcome_string() {
        let model = classifier();
        // logit = 10 - 0.1 * time
        assert_eq!(predict_from_form(&full_form(50.0), &model).message(), "Death");
        assert_eq!(predict_from_form(&full_form(200.0), &model).message(), "Survival");
        for time in [0.0, 99.0, 101.0, 1000.0] {
            let message = predict_from_form(&full_form(time), &model).message();
            assert!(message == "Death" || message == "Survival");
        }
    }

    #[test]
    fn no_bounds_checking_on_numeric_fields() {
        let form = full_form(50.0).with(AGE, -400.0);
        assert!(form.is_complete());
        assert_eq!(form.get(AGE), Some(-400.0));
    }

    #[test]
    fn set_text_parsing() {
        let mut form = PredictionForm::new();
        form.set_text(AGE, " 65 ");
        assert_eq!(form.get(AGE), Some(65.0));
        form.set_text(AGE, "");
        assert_eq!(form.get(AGE), None);
        form.set_text(AGE, "sixty");
        assert_eq!(form.get(AGE), None);
        form.set_text(AGE, "NaN");
        assert_eq!(form.get(AGE), None);
        form.set_text(AGE, "inf");
        assert_eq!(form.get(AGE), None);
    }

    #[test]
    fn binary_fields_accept_only_zero_or_one() {
        let mut form = PredictionForm::new();
        form.set_text(SEX, "1");
        assert_eq!(form.get(SEX), Some(1.0));
        form.set_text(SEX, "2");
        assert_eq!(form.get(SEX), None);
        form.set_text(SEX, "0");
        assert_eq!(form.get(SEX), Some(0.0));
    }

    #[test]
    fn feature_vector_follows_model_order() {
        let form = full_form(42.0);
        let v = form.to_feature_vector().unwrap();
        assert_eq!(v.0[11], 42.0);
        assert_eq!(v.0[0], 1.0);
        assert_eq!(v.0[1], 0.0);
    }
}
