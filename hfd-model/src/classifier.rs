//! Serialized, pre-trained outcome classifier.
//!
//! The model file is JSON tagged by `kind`:
//!
//! ```json
//! {
//!   "kind": "logistic_regression",
//!   "feature_names": ["age", "anaemia", ...],
//!   "coefficients": [0.68, 0.02, ...],
//!   "intercept": -1.05,
//!   "scaler": { "mean": [...], "scale": [...] },
//!   "threshold": 0.5
//! }
//! ```
//!
//! or `"kind": "random_forest"` with `trees: [{ "nodes": [...] }]`, where a
//! node is either `{ "feature", "threshold", "left", "right" }` (go left when
//! `x[feature] <= threshold`) or a leaf `{ "value" }` holding P(death).
//!
//! Everything that could make prediction fail is checked while the model is
//! deserialized, and the model types have private fields, so the only way
//! to obtain a [`Classifier`] is a file that passed validation. That is what
//! makes [`Classifier::predict`] infallible.

use crate::features::{Feature, FeatureVector, NUM_FEATURES};
use anyhow::Context;
use hfd_records::Outcome;
use serde::{Deserialize, Serialize};

/// File name the predictor's build script looks for under `fixtures/`.
pub const MODEL_FILE_NAME: &str = "heart_failure_model.json";

fn default_threshold() -> f64 {
    0.5
}

/// A loaded classifier. Treated as a black box by the rest of the workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classifier {
    LogisticRegression(LogisticRegression),
    RandomForest(RandomForest),
}

/// Standardisation applied to inputs before the linear model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Scaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

/// Linear model over (optionally standardised) inputs.
///
/// Fields are private; a model can only come from a validated file:
///
/// ```compile_fail
/// let _ = hfd_model::classifier::LogisticRegression {
///     feature_names: vec![],
///     coefficients: vec![],
///     intercept: 0.0,
///     scaler: None,
///     threshold: 0.5,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LogisticRegressionFile")]
pub struct LogisticRegression {
    feature_names: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
    scaler: Option<Scaler>,
    threshold: f64,
}

/// On-disk shape of [`LogisticRegression`], before validation.
#[derive(Deserialize)]
struct LogisticRegressionFile {
    feature_names: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
    #[serde(default)]
    scaler: Option<Scaler>,
    #[serde(default = "default_threshold")]
    threshold: f64,
}

impl TryFrom<LogisticRegressionFile> for LogisticRegression {
    type Error = anyhow::Error;

    fn try_from(file: LogisticRegressionFile) -> anyhow::Result<Self> {
        let model = Self {
            feature_names: file.feature_names,
            coefficients: file.coefficients,
            intercept: file.intercept,
            scaler: file.scaler,
            threshold: file.threshold,
        };
        model.validate()?;
        Ok(model)
    }
}

/// Averaged decision trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RandomForestFile")]
pub struct RandomForest {
    feature_names: Vec<String>,
    trees: Vec<Tree>,
    threshold: f64,
}

/// On-disk shape of [`RandomForest`], before validation.
#[derive(Deserialize)]
struct RandomForestFile {
    feature_names: Vec<String>,
    trees: Vec<Tree>,
    #[serde(default = "default_threshold")]
    threshold: f64,
}

impl TryFrom<RandomForestFile> for RandomForest {
    type Error = anyhow::Error;

    fn try_from(file: RandomForestFile) -> anyhow::Result<Self> {
        let model = Self {
            feature_names: file.feature_names,
            trees: file.trees,
            threshold: file.threshold,
        };
        model.validate()?;
        Ok(model)
    }
}

/// A decision tree stored as a flat node list; node 0 is the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Tree {
    nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

impl Classifier {
    /// Probability of death for one patient.
    pub fn probability(&self, x: &FeatureVector) -> f64 {
        match self {
            Self::LogisticRegression(m) => m.probability(x),
            Self::RandomForest(m) => m.probability(x),
        }
    }

    /// The single prediction call: map a feature vector to an outcome label.
    pub fn predict(&self, x: &FeatureVector) -> Outcome {
        let threshold = match self {
            Self::LogisticRegression(m) => m.threshold,
            Self::RandomForest(m) => m.threshold,
        };
        if self.probability(x) >= threshold {
            Outcome::Death
        } else {
            Outcome::Survival
        }
    }
}

impl LogisticRegression {
    fn probability(&self, x: &FeatureVector) -> f64 {
        let mut z = self.intercept;
        for (i, (value, coef)) in x.as_slice().iter().zip(&self.coefficients).enumerate() {
            let scaled = match &self.scaler {
                Some(s) => (value - s.mean[i]) / s.scale[i],
                None => *value,
            };
            z += coef * scaled;
        }
        1.0 / (1.0 + (-z).exp())
    }

    fn validate(&self) -> anyhow::Result<()> {
        check_feature_names(&self.feature_names)?;
        check_threshold(self.threshold)?;
        anyhow::ensure!(
            self.coefficients.len() == NUM_FEATURES,
            "Expected {} coefficients, got {}",
            NUM_FEATURES,
            self.coefficients.len()
        );
        anyhow::ensure!(
            self.intercept.is_finite() && self.coefficients.iter().all(|c| c.is_finite()),
            "Coefficients and intercept must be finite"
        );
        if let Some(scaler) = &self.scaler {
            anyhow::ensure!(
                scaler.mean.len() == NUM_FEATURES && scaler.scale.len() == NUM_FEATURES,
                "Scaler mean/scale must have {} entries",
                NUM_FEATURES
            );
            anyhow::ensure!(
                scaler.mean.iter().all(|m| m.is_finite())
                    && scaler.scale.iter().all(|s| s.is_finite() && *s != 0.0),
                "Scaler entries must be finite and scale non-zero"
            );
        }
        Ok(())
    }
}

impl RandomForest {
    fn probability(&self, x: &FeatureVector) -> f64 {
        let total: f64 = self.trees.iter().map(|t| t.evaluate(x)).sum();
        total / self.trees.len() as f64
    }

    fn validate(&self) -> anyhow::Result<()> {
        check_feature_names(&self.feature_names)?;
        check_threshold(self.threshold)?;
        anyhow::ensure!(!self.trees.is_empty(), "Random forest has no trees");
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate().with_context(|| format!("Invalid tree {}", i))?;
        }
        Ok(())
    }
}

impl Tree {
    /// Walk from the root to a leaf. Children always point forward, so this
    /// terminates.
    fn evaluate(&self, x: &FeatureVector) -> f64 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if x.0[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.nodes.is_empty(), "Tree has no nodes");
        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Leaf { value } => {
                    anyhow::ensure!(
                        (0.0..=1.0).contains(value),
                        "Leaf {} value {} is not a probability",
                        idx,
                        value
                    );
                }
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    anyhow::ensure!(
                        *feature < NUM_FEATURES,
                        "Node {} splits on feature {} (only {} features)",
                        idx,
                        feature,
                        NUM_FEATURES
                    );
                    anyhow::ensure!(threshold.is_finite(), "Node {} threshold is not finite", idx);
                    for child in [left, right] {
                        anyhow::ensure!(
                            *child > idx && *child < self.nodes.len(),
                            "Node {} has invalid child {}",
                            idx,
                            child
                        );
                    }
                }
            }
        }
        Ok(())
    }
}

fn check_feature_names(names: &[String]) -> anyhow::Result<()> {
    let expected: Vec<&str> = Feature::ORDER.iter().map(|f| f.name()).collect();
    anyhow::ensure!(
        names.iter().map(String::as_str).eq(expected.iter().copied()),
        "Model feature order {:?} does not match expected {:?}",
        names,
        expected
    );
    Ok(())
}

fn check_threshold(threshold: f64) -> anyhow::Result<()> {
    anyhow::ensure!(
        (0.0..=1.0).contains(&threshold),
        "Decision threshold {} is outside [0, 1]",
        threshold
    );
    Ok(())
}

/// Parse and validate a serialized classifier.
pub fn load_classifier(json: &str) -> anyhow::Result<Classifier> {
    let classifier: Classifier =
        serde_json::from_str(json).context("Failed to parse classifier JSON")?;
    match &classifier {
        Classifier::LogisticRegression(_) => log::info!("[HFD] model: loaded logistic regression"),
        Classifier::RandomForest(m) => {
            log::info!("[HFD] model: loaded random forest with {} trees", m.trees.len())
        }
    }
    Ok(classifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hfd_records::ContinuousColumn;

    const NAMES: &str = r#"["age","anaemia","creatinine_phosphokinase","diabetes","ejection_fraction","high_blood_pressure","platelets","serum_creatinine","serum_sodium","sex","smoking","time"]"#;

    /// Logistic model driven only by follow-up time: short follow-up → death.
    fn time_only_logistic() -> String {
        format!(
            r#"{{
                "kind": "logistic_regression",
                "feature_names": {},
                "coefficients": [0,0,0,0,0,0,0,0,0,0,0,-1],
                "intercept": 0,
                "scaler": {{ "mean": [0,0,0,0,0,0,0,0,0,0,0,100], "scale": [1,1,1,1,1,1,1,1,1,1,1,10] }}
            }}"#,
            NAMES
        )
    }

    fn vector_with_time(time: f64) -> FeatureVector {
        let mut v = [60.0, 0.0, 250.0, 0.0, 38.0, 0.0, 262000.0, 1.1, 137.0, 1.0, 0.0, 0.0];
        v[Feature::Continuous(ContinuousColumn::FollowUpPeriod).index()] = time;
        FeatureVector(v)
    }

    #[test]
    fn logistic_regression_predicts_both_labels() {
        let model = load_classifier(&time_only_logistic()).unwrap();
        assert_eq!(model.predict(&vector_with_time(10.0)), Outcome::Death);
        assert_eq!(model.predict(&vector_with_time(250.0)), Outcome::Survival);
        // At the scaler mean the logit is 0
        assert!((model.probability(&vector_with_time(100.0)) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn threshold_defaults_to_half() {
        match load_classifier(&time_only_logistic()).unwrap() {
            Classifier::LogisticRegression(m) => assert_eq!(m.threshold, 0.5),
            other => panic!("unexpected model {:?}", other),
        }
    }

    #[test]
    fn random_forest_averages_trees() {
        let json = format!(
            r#"{{
                "kind": "random_forest",
                "feature_names": {},
                "trees": [
                    {{ "nodes": [
                        {{ "feature": 4, "threshold": 30.0, "left": 1, "right": 2 }},
                        {{ "value": 0.9 }},
                        {{ "value": 0.1 }}
                    ] }},
                    {{ "nodes": [ {{ "value": 0.6 }} ] }}
                ]
            }}"#,
            NAMES
        );
        let model = load_classifier(&json).unwrap();
        let mut low_ef = vector_with_time(100.0);
        low_ef.0[4] = 20.0;
        assert!((model.probability(&low_ef) - 0.75).abs() < 1e-12);
        assert_eq!(model.predict(&low_ef), Outcome::Death);

        let mut high_ef = low_ef;
        high_ef.0[4] = 60.0;
        assert!((model.probability(&high_ef) - 0.35).abs() < 1e-12);
        assert_eq!(model.predict(&high_ef), Outcome::Survival);
    }

    #[test]
    fn rejects_wrong_feature_order() {
        let json = time_only_logistic().replace("\"age\",\"anaemia\"", "\"anaemia\",\"age\"");
        assert!(load_classifier(&json).is_err());
    }

    #[test]
    fn rejects_wrong_coefficient_count() {
        let json = time_only_logistic().replace("[0,0,0,0,0,0,0,0,0,0,0,-1]", "[0,-1]");
        assert!(load_classifier(&json).is_err());
    }

    #[test]
    fn rejects_zero_scale() {
        let json = time_only_logistic().replace("[1,1,1,1,1,1,1,1,1,1,1,10]", "[1,1,1,1,1,1,1,1,1,1,1,0]");
        assert!(load_classifier(&json).is_err());
    }

    #[test]
    fn rejects_cyclic_tree() {
        let json = format!(
            r#"{{
                "kind": "random_forest",
                "feature_names": {},
                "trees": [ {{ "nodes": [
                    {{ "feature": 0, "threshold": 50.0, "left": 0, "right": 1 }},
                    {{ "value": 0.2 }}
                ] }} ]
            }}"#,
            NAMES
        );
        assert!(load_classifier(&json).is_err());
    }

    #[test]
    fn committed_model_fixture_loads() {
        let model = load_classifier(include_str!("../../fixtures/heart_failure_model.json")).unwrap();
        let early_death = FeatureVector([
            75.0, 0.0, 582.0, 0.0, 20.0, 1.0, 265000.0, 1.9, 130.0, 1.0, 0.0, 4.0,
        ]);
        let long_follow_up = FeatureVector([
            50.0, 0.0, 196.0, 0.0, 45.0, 0.0, 395000.0, 1.6, 136.0, 1.0, 1.0, 285.0,
        ]);
        assert_eq!(model.predict(&early_death), Outcome::Death);
        assert_eq!(model.predict(&long_follow_up), Outcome::Survival);
    }

    #[test]
    fn direct_deserialization_still_validates() {
        let empty_tree = format!(
            r#"{{ "kind": "random_forest", "feature_names": {}, "trees": [ {{ "nodes": [] }} ] }}"#,
            NAMES
        );
        assert!(serde_json::from_str::<Classifier>(&empty_tree).is_err());

        let empty_scaler = format!(
            r#"{{
                "kind": "logistic_regression",
                "feature_names": {},
                "coefficients": [0,0,0,0,0,0,0,0,0,0,0,0],
                "intercept": 0,
                "scaler": {{ "mean": [], "scale": [] }}
            }}"#,
            NAMES
        );
        assert!(serde_json::from_str::<Classifier>(&empty_scaler).is_err());
        assert!(serde_json::from_str::<LogisticRegression>(
            &empty_scaler.replace("\"kind\": \"logistic_regression\",", "")
        )
        .is_err());
    }

    #[test]
    fn serialized_model_reloads() {
        let model = load_classifier(&time_only_logistic()).unwrap();
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(load_classifier(&json).unwrap(), model);
    }

    #[test]
    fn rejects_unknown_kind_and_garbage() {
        assert!(load_classifier(r#"{"kind": "svm"}"#).is_err());
        assert!(load_classifier("not json").is_err());
    }
}
