//! Devnet Wallet Tools
//!
//! Small standalone programs for a Solana devnet dev wallet: request an
//! airdrop, sweep the whole balance to a fixed recipient with the exact fee
//! taken off, and generate a new keypair file.
//!
//! Transactions are built and signed locally and sent over JSON-RPC.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod keys;
pub mod rpc;
pub mod sweep;
pub mod transaction;

pub use config::{Commitment, NetworkConfig};
pub use error::{Error, Result};
pub use keys::{Keypair, Pubkey};
pub use rpc::RpcClient;
pub use sweep::{SweepPlan, SweepReceipt};
