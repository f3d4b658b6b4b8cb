//! Generate a new dev wallet keypair file.

use clap::Parser;
use devnet_wallet::{
    cli::{init_logging, KeypairArgs},
    commands::{keygen, print_error},
};

#[derive(Parser)]
#[command(name = "keygen")]
#[command(about = "Generate a new devnet wallet keypair")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    args: KeypairArgs,

    /// Overwrite an existing keypair file
    #[arg(long)]
    force: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.args.verbose);

    if let Err(e) = keygen::run(&cli.args.keypair, cli.force) {
        print_error(&format!("{:#}", e));
    }
}
