//! Location of the dataset and, behind the `api` feature, an HTTP fetcher.

/// UCI Machine Learning Repository copy of the dataset.
pub const DATASET_URL: &str = "https://archive.ics.uci.edu/ml/machine-learning-databases/00519/heart_failure_clinical_records_dataset.csv";

/// File name the dashboards' build scripts look for under `fixtures/`.
pub const DATASET_FILE_NAME: &str = "heart_failure_clinical_records_dataset.csv";

/// Committed subset used when the full dataset has not been fetched.
pub const SAMPLE_FILE_NAME: &str = "heart_failure_sample.csv";

#[cfg(feature = "api")]
use log::{info, warn};
#[cfg(feature = "api")]
use std::time::Duration;

/// Download the dataset CSV, retrying with exponential backoff.
///
/// The body is parsed before it is returned so a non-CSV error page is
/// never mistaken for data.
#[cfg(feature = "api")]
pub async fn fetch_dataset(client: &reqwest::Client, url: &str) -> anyhow::Result<String> {
    let max_tries = 3;
    let mut sleep_millis: u64 = 1000;
    let mut last_err = None;

    for attempt in 1..=max_tries {
        info!("Fetching dataset from {} (attempt {}/{})", url, attempt, max_tries);
        match client.get(url).send().await {
            Ok(response) if response.status().is_success() => {
                let body = response.text().await?;
                let patients = crate::patient::parse_patient_csv(&body)?;
                info!("Fetched {} patient records", patients.len());
                return Ok(body);
            }
            Ok(response) => {
                warn!("Bad response from {}: {}", url, response.status());
                last_err = Some(anyhow::anyhow!("HTTP {}", response.status()));
            }
            Err(e) => {
                warn!("Request to {} failed: {}", url, e);
                last_err = Some(e.into());
            }
        }
        if attempt < max_tries {
            tokio::time::sleep(Duration::from_millis(sleep_millis)).await;
            sleep_millis *= 2;
        }
    }

    Err(last_err
        .unwrap_or_else(|| anyhow::anyhow!("no attempts made"))
        .context(format!("Failed to fetch dataset from {}", url)))
}
