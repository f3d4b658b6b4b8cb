//! Airdrop command

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    config::NetworkConfig,
    keys::Keypair,
    rpc::RpcClient,
    transaction::format_sol,
};

use super::{print_success, success_line};

/// Request `lamports` of test funds for the dev wallet.
///
/// Returns the explorer link for the airdrop transaction.
pub async fn run(config: &NetworkConfig, lamports: u64) -> Result<String> {
    let keypair = Keypair::read_from_file(&config.keypair_path)
        .context("Failed to load dev wallet")?;
    let rpc = RpcClient::new(&config.rpc_url, config.commitment)?;

    info!(
        "Requesting {} for {} from {}",
        format_sol(lamports),
        keypair.pubkey(),
        rpc.url()
    );

    let signature = rpc.request_airdrop(&keypair.pubkey(), lamports).await?;

    let url = config.explorer_url(&signature);
    print_success(&success_line(&url));
    Ok(url)
}
