//! HFD CLI - fetch, summarise and predict over the heart failure clinical records.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "hfd-cli",
    version,
    about = "Heart failure clinical records toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: hfd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("hfd-cli starting");
    hfd_cmd::run(cli.command).await
}
