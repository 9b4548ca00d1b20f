//! Build script for dashboard-explorer.
//!
//! Copies the patient records CSV to OUT_DIR so it can be embedded via
//! `include_str!` at compile time, rejecting a file that does not parse as
//! patient records. Prefers the full dataset written by
//! `hfd-cli fetch` and falls back to the committed sample.

use hfd_records::patient::parse_patient_csv;
use hfd_records::source::{DATASET_FILE_NAME, SAMPLE_FILE_NAME};
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join(DATASET_FILE_NAME);

    let full = format!("../fixtures/{}", DATASET_FILE_NAME);
    let sample = format!("../fixtures/{}", SAMPLE_FILE_NAME);

    let src = if Path::new(&full).exists() {
        full.clone()
    } else {
        println!(
            "cargo:warning=Fixture file {} not found, using {}",
            full, sample
        );
        sample.clone()
    };
    let csv_data = fs::read_to_string(&src)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", src, e));
    if let Err(e) = parse_patient_csv(&csv_data) {
        panic!("{} is not a valid patient records CSV: {:#}", src, e);
    }
    fs::write(&dest, csv_data).unwrap_or_else(|e| {
        panic!("Failed to write {}: {}", dest.display(), e);
    });

    println!("cargo:rerun-if-changed={}", full);
    println!("cargo:rerun-if-changed={}", sample);
    println!("cargo:rerun-if-changed=build.rs");
}
