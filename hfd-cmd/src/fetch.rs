//! Download the dataset CSV to disk.

use hfd_records::source::fetch_dataset;
use log::info;
use std::path::Path;

/// Fetch the dataset from `url` and write it to `output`.
///
/// The body is verified to parse as patient records before anything is
/// written, so a failed download never clobbers an existing file.
pub async fn run_fetch(output: &str, url: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;

    let body = fetch_dataset(&client, url).await?;

    if let Some(parent) = Path::new(output).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(output, &body).await?;

    info!("Wrote {} bytes to {}", body.len(), output);
    Ok(())
}
