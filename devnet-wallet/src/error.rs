//! Error types for the devnet wallet tools

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the keypair loader, the RPC client and the sweep flow.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    KeypairIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("keypair file is not a JSON byte array: {0}")]
    KeypairJson(#[from] serde_json::Error),

    #[error("keypair must be 64 bytes, got {0}")]
    KeypairLength(usize),

    #[error("public key does not match secret key")]
    KeypairMismatch,

    #[error("keypair file {0} already exists")]
    KeypairExists(PathBuf),

    #[error("invalid public key {input:?}: {reason}")]
    InvalidPubkey { input: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("missing result in RPC response to {0}")]
    MissingResult(String),

    #[error("invalid RPC response: {0}")]
    InvalidResponse(String),

    #[error("invalid config: {0}")]
    Config(String),

    #[error("transaction {signature} failed: {reason}")]
    TransactionFailed { signature: String, reason: String },

    #[error("signature {signature} has expired: block height exceeded {last_valid_block_height}")]
    BlockHeightExceeded {
        signature: String,
        last_valid_block_height: u64,
    },
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
