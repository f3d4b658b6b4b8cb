//! Transfer the dev wallet's entire balance, minus the exact fee.

use clap::Parser;
use devnet_wallet::{
    cli::{init_logging, NetworkArgs},
    commands::{report_failure, transfer},
    Pubkey, SweepReceipt,
};

#[derive(Parser)]
#[command(name = "transfer")]
#[command(about = "Empty the dev wallet into the recipient account")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    network: NetworkArgs,

    /// Recipient public key (base-58); defaults to the configured recipient
    #[arg(long)]
    to: Option<Pubkey>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.network.verbose);

    if let Err(e) = run(&cli).await {
        report_failure(&e);
    }
}

async fn run(cli: &Cli) -> anyhow::Result<SweepReceipt> {
    let config = cli.network.load()?;
    transfer::run(&config, cli.to).await
}
