//! Outcome prediction for manually entered patient attributes.
//!
//! - `features`: the twelve model inputs and their fixed order
//! - `form`: a partially filled prediction form
//! - `classifier`: a serialized, already-trained classifier and its single
//!   `predict` operation
//!
//! No training happens here; the classifier file is an opaque artifact.

pub mod classifier;
pub mod features;
pub mod form;

pub use classifier::{load_classifier, Classifier, MODEL_FILE_NAME};
pub use features::{Feature, FeatureKind, FeatureVector};
pub use form::{predict_from_form, Prediction, PredictionForm, COMPLETE_FORM_PROMPT};
