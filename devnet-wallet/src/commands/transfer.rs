//! Full-balance transfer command

use anyhow::{Context, Result};

use crate::{
    config::NetworkConfig,
    keys::{Keypair, Pubkey},
    rpc::RpcClient,
    sweep::{sweep, SweepReceipt},
    transaction::format_sol,
};

use super::{print_success, success_line};

/// Sweep the dev wallet's balance, minus the fee, to `recipient` (or the
/// configured recipient).
pub async fn run(config: &NetworkConfig, recipient: Option<Pubkey>) -> Result<SweepReceipt> {
    let from = Keypair::read_from_file(&config.keypair_path)
        .context("Failed to load dev wallet")?;
    let to = match recipient {
        Some(to) => to,
        None => config.recipient_pubkey()?,
    };
    let rpc = RpcClient::new(&config.rpc_url, config.commitment)?;

    let receipt = sweep(&rpc, &from, &to, config.confirm_poll_interval()).await?;

    println!(
        "Sent {} to {} (fee {})",
        format_sol(receipt.plan.amount),
        to,
        format_sol(receipt.plan.fee)
    );
    print_success(&success_line(&config.explorer_url(&receipt.signature)));

    Ok(receipt)
}
