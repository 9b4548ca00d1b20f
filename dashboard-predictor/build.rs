//! Build script for dashboard-predictor.
//!
//! Copies the patient records CSV and the serialized classifier to OUT_DIR
//! so they can be embedded via `include_str!` at compile time. Both files
//! are parsed here first, so a bad fixture fails the build rather than the
//! page.

use hfd_model::{load_classifier, MODEL_FILE_NAME};
use hfd_records::patient::parse_patient_csv;
use hfd_records::source::{DATASET_FILE_NAME, SAMPLE_FILE_NAME};
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let full = format!("../fixtures/{}", DATASET_FILE_NAME);
    let sample = format!("../fixtures/{}", SAMPLE_FILE_NAME);
    let dataset_src = if Path::new(&full).exists() {
        full.clone()
    } else {
        println!(
            "cargo:warning=Fixture file {} not found, using {}",
            full, sample
        );
        sample.clone()
    };
    let csv_data = fs::read_to_string(&dataset_src)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", dataset_src, e));
    if let Err(e) = parse_patient_csv(&csv_data) {
        panic!("{} is not a valid patient records CSV: {:#}", dataset_src, e);
    }
    fs::write(Path::new(&out_dir).join(DATASET_FILE_NAME), csv_data).unwrap();

    let model_src = format!("../fixtures/{}", MODEL_FILE_NAME);
    let model_json = fs::read_to_string(&model_src)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", model_src, e));
    if let Err(e) = load_classifier(&model_json) {
        panic!("{} is not a valid classifier: {:#}", model_src, e);
    }
    fs::write(Path::new(&out_dir).join(MODEL_FILE_NAME), model_json).unwrap();

    for path in [&full, &sample, &model_src] {
        println!("cargo:rerun-if-changed={}", path);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
