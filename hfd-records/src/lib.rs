//! Core types for the heart failure clinical records dataset.
//!
//! - `column`: the catalogue of continuous and indicator columns with their
//!   raw CSV headers and display names
//! - `outcome`: the binary death event label
//! - `patient`: one parsed dataset row
//! - `source`: where the dataset lives (and, with the `api` feature, fetching it)

pub mod column;
pub mod outcome;
pub mod patient;
pub mod source;

pub use column::{ContinuousColumn, IndicatorColumn};
pub use outcome::Outcome;
pub use patient::PatientRecord;
