//! Fee-exact balance sweep
//!
//! Moves a wallet's whole balance to a recipient with nothing left behind.
//! The fee depends on the compiled message, so the transfer is built twice:
//! once with the full balance to measure the fee, then again with the fee
//! taken off.

use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::keys::{Keypair, Pubkey};
use crate::rpc::RpcClient;
use crate::transaction::{format_sol, system_transfer, Hash, Message, Transaction};

/// The numbers behind a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepPlan {
    /// Sender balance before the sweep
    pub balance: u64,
    /// Network fee for the transfer message
    pub fee: u64,
    /// Lamports moved to the recipient
    pub amount: u64,
}

impl SweepPlan {
    /// Plan a sweep of `balance` paying `fee`.
    ///
    /// When the fee is at least the balance the amount floors at zero and the
    /// transaction is still submitted, leaving the rejection to the network.
    pub fn new(balance: u64, fee: u64) -> Self {
        Self {
            balance,
            fee,
            amount: balance.saturating_sub(fee),
        }
    }

    /// Whether the balance covers the fee
    pub fn is_funded(&self) -> bool {
        self.fee < self.balance
    }

    /// What the sender holds once the transfer and fee have both been paid
    pub fn residual(&self) -> i128 {
        self.balance as i128 - self.amount as i128 - self.fee as i128
    }
}

/// Outcome of a confirmed sweep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReceipt {
    pub plan: SweepPlan,
    pub signature: String,
}

/// Build the transfer message for `lamports`, paid for by the sender
fn transfer_message(from: &Pubkey, to: &Pubkey, lamports: u64, blockhash: Hash) -> Message {
    Message::new(&[system_transfer(from, to, lamports)], from, blockhash)
}

/// Transfer the sender's entire balance minus the exact network fee
pub async fn sweep(
    rpc: &RpcClient,
    from: &Keypair,
    to: &Pubkey,
    poll_interval: Duration,
) -> Result<SweepReceipt> {
    let sender = from.pubkey();

    let balance = rpc.get_balance(&sender).await?;
    info!("Balance of {}: {}", sender, format_sol(balance));

    let latest = rpc.get_latest_blockhash().await?;

    // The provisional message only measures the fee and is never signed
    let provisional = transfer_message(&sender, to, balance, latest.blockhash);
    let fee = rpc.get_fee_for_message(&provisional).await?.unwrap_or(0);
    debug!("Fee for transfer message: {} lamports", fee);

    let plan = SweepPlan::new(balance, fee);
    if !plan.is_funded() {
        warn!(
            "Fee {} is not less than balance {}; submitting anyway",
            format_sol(fee),
            format_sol(balance)
        );
    }

    let message = transfer_message(&sender, to, plan.amount, latest.blockhash);
    let tx = Transaction::sign(message, from);

    info!("Sending {} to {}", format_sol(plan.amount), to);
    let signature = rpc
        .send_and_confirm_transaction(&tx, latest.last_valid_block_height, poll_interval)
        .await?;

    Ok(SweepReceipt { plan, signature })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_leaves_no_residual() {
        let plan = SweepPlan::new(2_000_000_000, 5_000);
        assert_eq!(plan.amount, 1_999_995_000);
        assert_eq!(plan.residual(), 0);
        assert!(plan.is_funded());
    }

    #[test]
    fn test_plan_with_zero_fee() {
        let plan = SweepPlan::new(10, 0);
        assert_eq!(plan.amount, 10);
        assert_eq!(plan.residual(), 0);
    }

    #[test]
    fn test_plan_fee_equal_to_balance() {
        let plan = SweepPlan::new(5_000, 5_000);
        assert_eq!(plan.amount, 0);
        assert!(!plan.is_funded());
        assert_eq!(plan.residual(), 0);
    }

    #[test]
    fn test_plan_fee_exceeds_balance() {
        let plan = SweepPlan::new(1_000, 5_000);
        assert_eq!(plan.amount, 0);
        assert!(!plan.is_funded());
        assert_eq!(plan.residual(), -4_000);
    }

    #[test]
    fn test_provisional_and_final_messages_differ_only_in_amount() {
        let from = Keypair::generate().pubkey();
        let to = Pubkey::new([2u8; 32]);

        let provisional = transfer_message(&from, &to, 1_000, [1u8; 32]);
        let corrected = transfer_message(&from, &to, 995, [1u8; 32]);

        assert_eq!(provisional.header, corrected.header);
        assert_eq!(provisional.account_keys, corrected.account_keys);
        assert_eq!(provisional.serialize().len(), corrected.serialize().len());
        assert_ne!(provisional.instructions, corrected.instructions);
    }
}
