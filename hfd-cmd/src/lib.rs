//! Command implementations for the heart failure dashboard CLI.
//!
//! Provides subcommands for fetching the dataset into `fixtures/`,
//! summarising a dataset file, and running the classifier on one patient.

use clap::Subcommand;
use hfd_records::source::DATASET_URL;

pub mod fetch;
pub mod predict;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Download the patient records CSV and verify it parses
    Fetch {
        /// Output path for the dataset CSV
        #[arg(short = 'o', long)]
        output: String,

        /// Source URL
        #[arg(long, default_value = DATASET_URL)]
        url: String,
    },

    /// Print patient and outcome counts plus per-column means and bounds
    Summary {
        /// Path to a patient records CSV
        #[arg(short = 'd', long)]
        dataset: String,

        /// Print the summary table as CSV instead of aligned text
        #[arg(long)]
        csv: bool,
    },

    /// Predict the outcome for one patient; unset fields yield a prompt
    Predict {
        /// Path to the serialized classifier JSON
        #[arg(short = 'm', long)]
        model: String,

        #[command(flatten)]
        patient: predict::PatientArgs,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { output, url } => fetch::run_fetch(&output, &url).await,
        Command::Summary { dataset, csv } => summary::run_summary(&dataset, csv),
        Command::Predict { model, patient } => predict::run_predict(&model, &patient),
    }
}
