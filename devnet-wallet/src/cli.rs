//! Command-line arguments and logging setup shared by the binaries

use clap::Args;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Commitment, NetworkConfig, DEFAULT_KEYPAIR_PATH};
use crate::error::Result;
use crate::transaction::parse_sol;

/// Network options common to every tool
#[derive(Debug, Clone, Args)]
pub struct NetworkArgs {
    /// TOML config file (defaults are the public devnet settings)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON-RPC URL
    #[arg(short, long, env = "DEVNET_RPC_URL")]
    pub url: Option<String>,

    /// Keypair file (JSON array of 64 bytes)
    #[arg(short, long, env = "DEVNET_KEYPAIR")]
    pub keypair: Option<PathBuf>,

    /// Commitment level: processed, confirmed or finalized
    #[arg(long)]
    pub commitment: Option<Commitment>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl NetworkArgs {
    /// Resolve the effective config: file (if any), then flag overrides
    pub fn load(&self) -> Result<NetworkConfig> {
        let mut config = match &self.config {
            Some(path) => NetworkConfig::from_file(path)?,
            None => NetworkConfig::default(),
        };

        if let Some(url) = &self.url {
            config.rpc_url = url.clone();
        }
        if let Some(keypair) = &self.keypair {
            config.keypair_path = keypair.clone();
        }
        if let Some(commitment) = self.commitment {
            config.commitment = commitment;
        }

        Ok(config)
    }
}

/// Options for tools that only touch the local keypair file
#[derive(Debug, Clone, Args)]
pub struct KeypairArgs {
    /// Keypair file to write
    #[arg(short, long, env = "DEVNET_KEYPAIR", default_value = DEFAULT_KEYPAIR_PATH)]
    pub keypair: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse a SOL amount for clap
pub fn parse_lamports(src: &str) -> std::result::Result<u64, String> {
    parse_sol(src).ok_or_else(|| format!("Invalid SOL amount: {}", src))
}

/// Initialize logging; `RUST_LOG` wins over the verbosity flag
pub fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
