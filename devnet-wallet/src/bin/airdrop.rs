//! Request devnet test funds for the dev wallet.

use clap::Parser;
use devnet_wallet::{
    cli::{init_logging, parse_lamports, NetworkArgs},
    commands::{airdrop, report_failure},
};

#[derive(Parser)]
#[command(name = "airdrop")]
#[command(about = "Request devnet SOL for the dev wallet")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    network: NetworkArgs,

    /// Amount to request, in SOL
    #[arg(long = "sol", default_value = "2", value_parser = parse_lamports)]
    lamports: u64,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.network.verbose);

    if let Err(e) = run(&cli).await {
        report_failure(&e);
    }
}

async fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = cli.network.load()?;
    airdrop::run(&config, cli.lamports).await
}
