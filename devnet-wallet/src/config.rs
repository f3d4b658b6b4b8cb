//! Network configuration for the devnet tools.

use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf, time::Duration};

use crate::error::{Error, Result};
use crate::keys::Pubkey;

/// Public devnet JSON-RPC endpoint
pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";

/// Default keypair file, relative to the working directory
pub const DEFAULT_KEYPAIR_PATH: &str = "dev-wallet.json";

/// Recipient of the full-balance transfer
pub const DEFAULT_RECIPIENT: &str = "HrK9NkuGnVnu6TsEvRfdDhsnTBEH89VtGnANyTCUAyXm";

/// Settings shared by the network tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// JSON-RPC URL
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// Cluster name passed to the explorer link
    #[serde(default = "default_explorer_cluster")]
    pub explorer_cluster: String,

    /// Commitment used for blockhash, fee and confirmation queries
    #[serde(default)]
    pub commitment: Commitment,

    /// Path to the JSON byte array keypair file
    #[serde(default = "default_keypair_path")]
    pub keypair_path: PathBuf,

    /// Base-58 recipient of `transfer`
    #[serde(default = "default_recipient")]
    pub recipient: String,

    /// Delay between signature status polls, in milliseconds
    #[serde(default = "default_confirm_poll_ms")]
    pub confirm_poll_ms: u64,
}

fn default_rpc_url() -> String {
    DEVNET_RPC_URL.to_string()
}

fn default_explorer_cluster() -> String {
    "devnet".to_string()
}

fn default_keypair_path() -> PathBuf {
    PathBuf::from(DEFAULT_KEYPAIR_PATH)
}

fn default_recipient() -> String {
    DEFAULT_RECIPIENT.to_string()
}

fn default_confirm_poll_ms() -> u64 {
    500
}

/// How settled a ledger state must be
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    /// Processed by the connected node, may be rolled back
    Processed,
    /// Voted on by a supermajority
    #[default]
    Confirmed,
    /// Rooted
    Finalized,
}

impl Commitment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Commitment::Processed => "processed",
            Commitment::Confirmed => "confirmed",
            Commitment::Finalized => "finalized",
        }
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Commitment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "processed" => Ok(Commitment::Processed),
            "confirmed" => Ok(Commitment::Confirmed),
            "finalized" => Ok(Commitment::Finalized),
            _ => Err(format!("Unknown commitment: {}", s)),
        }
    }
}

impl NetworkConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text; missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.rpc_url.is_empty() {
            return Err(Error::Config("rpc_url must be set".to_string()));
        }
        self.recipient_pubkey()?;
        Ok(())
    }

    pub fn recipient_pubkey(&self) -> Result<Pubkey> {
        self.recipient.parse()
    }

    pub fn confirm_poll_interval(&self) -> Duration {
        Duration::from_millis(self.confirm_poll_ms)
    }

    /// Explorer link for a transaction signature
    pub fn explorer_url(&self, signature: &str) -> String {
        format!(
            "https://explorer.solana.com/tx/{}?cluster={}",
            signature, self.explorer_cluster
        )
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            explorer_cluster: default_explorer_cluster(),
            commitment: Commitment::default(),
            keypair_path: default_keypair_path(),
            recipient: default_recipient(),
            confirm_poll_ms: default_confirm_poll_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NetworkConfig::default();
        assert_eq!(config.rpc_url, DEVNET_RPC_URL);
        assert_eq!(config.commitment, Commitment::Confirmed);
        assert_eq!(config.keypair_path, PathBuf::from("dev-wallet.json"));
        assert_eq!(
            config.recipient_pubkey().unwrap().to_string(),
            DEFAULT_RECIPIENT
        );
    }

    #[test]
    fn test_explorer_url() {
        let config = NetworkConfig::default();
        assert_eq!(
            config.explorer_url("abc123"),
            "https://explorer.solana.com/tx/abc123?cluster=devnet"
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = NetworkConfig::from_toml(
            r#"
            rpc_url = "http://localhost:8899"
            commitment = "finalized"
            "#,
        )
        .unwrap();

        assert_eq!(config.rpc_url, "http://localhost:8899");
        assert_eq!(config.commitment, Commitment::Finalized);
        assert_eq!(config.explorer_cluster, "devnet");
        assert_eq!(config.confirm_poll_ms, 500);
    }

    #[test]
    fn test_invalid_recipient_rejected() {
        let err = NetworkConfig::from_toml(r#"recipient = "0OIl""#).unwrap_err();
        assert!(matches!(err, Error::InvalidPubkey { .. }));
    }

    #[test]
    fn test_commitment_ordering_and_parsing() {
        assert!(Commitment::Processed < Commitment::Confirmed);
        assert!(Commitment::Confirmed < Commitment::Finalized);
        assert_eq!("Finalized".parse::<Commitment>(), Ok(Commitment::Finalized));
        assert!("recent".parse::<Commitment>().is_err());
    }
}
