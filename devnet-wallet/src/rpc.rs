//! JSON-RPC Client
//!
//! A thin client for the handful of cluster RPC methods the tools use:
//! balance, latest blockhash, message fee, airdrop, submission and
//! signature status. One request is in flight at a time and nothing is
//! retried.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};
use tracing::{debug, info};

use crate::config::Commitment;
use crate::error::{Error, Result};
use crate::keys::Pubkey;
use crate::transaction::{Hash, Message, Transaction};

/// Timeout for RPC requests
const RPC_TIMEOUT: Duration = Duration::from_secs(30);

/// JSON-RPC request ID counter
static REQUEST_ID: AtomicU64 = AtomicU64::new(1);

/// JSON-RPC 2.0 request
#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: Value,
    id: u64,
}

/// JSON-RPC 2.0 response
#[derive(Debug, Deserialize)]
struct JsonRpcResponse<T> {
    result: Option<T>,
    error: Option<JsonRpcError>,
}

/// JSON-RPC error
#[derive(Debug, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    pub data: Option<Value>,
}

/// Result wrapper carrying the slot the node answered at
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse<T> {
    pub context: RpcContext,
    pub value: T,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcContext {
    pub slot: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RpcBlockhash {
    blockhash: String,
    last_valid_block_height: u64,
}

/// A recent blockhash and the last block height at which messages built on
/// it are still accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatestBlockhash {
    pub blockhash: Hash,
    pub last_valid_block_height: u64,
}

/// Status of a submitted signature
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureStatus {
    pub slot: u64,
    pub confirmations: Option<u64>,
    pub err: Option<Value>,
    pub confirmation_status: Option<Commitment>,
}

impl SignatureStatus {
    /// Whether the status has reached `commitment`
    pub fn satisfies(&self, commitment: Commitment) -> bool {
        match self.confirmation_status {
            Some(status) => status >= commitment,
            // Older nodes only report a confirmation count; None means rooted
            None => self.confirmations.is_none(),
        }
    }
}

/// JSON-RPC client for a single cluster endpoint
#[derive(Debug, Clone)]
pub struct RpcClient {
    client: reqwest::Client,
    url: String,
    commitment: Commitment,
}

impl RpcClient {
    pub fn new(url: impl Into<String>, commitment: Commitment) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(RPC_TIMEOUT).build()?;

        Ok(Self {
            client,
            url: url.into(),
            commitment,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn commitment(&self) -> Commitment {
        self.commitment
    }

    /// Execute a single JSON-RPC call
    pub async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T> {
        let id = REQUEST_ID.fetch_add(1, Ordering::SeqCst);
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id,
        };

        debug!("RPC {} (id {})", method, id);

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let json_response: JsonRpcResponse<T> = response.json().await?;

        if let Some(error) = json_response.error {
            return Err(Error::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        json_response
            .result
            .ok_or_else(|| Error::MissingResult(method.to_string()))
    }

    fn commitment_config(&self) -> Value {
        json!({ "commitment": self.commitment.as_str() })
    }

    /// Balance of `pubkey` in lamports
    pub async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64> {
        let response: RpcResponse<u64> = self
            .call(
                "getBalance",
                json!([pubkey.to_string(), self.commitment_config()]),
            )
            .await?;
        Ok(response.value)
    }

    pub async fn get_latest_blockhash(&self) -> Result<LatestBlockhash> {
        let response: RpcResponse<RpcBlockhash> = self
            .call("getLatestBlockhash", json!([self.commitment_config()]))
            .await?;

        let bytes = bs58::decode(&response.value.blockhash)
            .into_vec()
            .map_err(|e| Error::InvalidResponse(format!("blockhash: {}", e)))?;
        let blockhash: Hash = bytes
            .try_into()
            .map_err(|_| Error::InvalidResponse("blockhash is not 32 bytes".to_string()))?;

        Ok(LatestBlockhash {
            blockhash,
            last_valid_block_height: response.value.last_valid_block_height,
        })
    }

    /// Fee the network would charge for `message`, or `None` if the node no
    /// longer recognizes its blockhash
    pub async fn get_fee_for_message(&self, message: &Message) -> Result<Option<u64>> {
        let response: RpcResponse<Option<u64>> = self
            .call(
                "getFeeForMessage",
                json!([message.to_base64(), self.commitment_config()]),
            )
            .await?;
        Ok(response.value)
    }

    pub async fn get_block_height(&self) -> Result<u64> {
        self.call("getBlockHeight", json!([self.commitment_config()]))
            .await
    }

    /// Ask the faucet for `lamports`; returns the airdrop signature
    pub async fn request_airdrop(&self, pubkey: &Pubkey, lamports: u64) -> Result<String> {
        self.call(
            "requestAirdrop",
            json!([pubkey.to_string(), lamports, self.commitment_config()]),
        )
        .await
    }

    /// Submit a signed transaction; returns its signature
    pub async fn send_transaction(&self, tx: &Transaction) -> Result<String> {
        self.call(
            "sendTransaction",
            json!([
                tx.to_base64(),
                {
                    "encoding": "base64",
                    "preflightCommitment": self.commitment.as_str(),
                }
            ]),
        )
        .await
    }

    pub async fn get_signature_status(&self, signature: &str) -> Result<Option<SignatureStatus>> {
        let response: RpcResponse<Vec<Option<SignatureStatus>>> = self
            .call("getSignatureStatuses", json!([[signature]]))
            .await?;
        Ok(response.value.into_iter().next().flatten())
    }

    /// Poll until `signature` reaches the client's commitment, fails, or its
    /// blockhash expires.
    pub async fn confirm_transaction(
        &self,
        signature: &str,
        last_valid_block_height: u64,
        poll_interval: Duration,
    ) -> Result<()> {
        loop {
            if let Some(status) = self.get_signature_status(signature).await? {
                if let Some(err) = status.err {
                    return Err(Error::TransactionFailed {
                        signature: signature.to_string(),
                        reason: err.to_string(),
                    });
                }
                if status.satisfies(self.commitment) {
                    info!("Transaction {} reached {}", signature, self.commitment);
                    return Ok(());
                }
            }

            if self.get_block_height().await? > last_valid_block_height {
                return Err(Error::BlockHeightExceeded {
                    signature: signature.to_string(),
                    last_valid_block_height,
                });
            }

            tokio::time::sleep(poll_interval).await;
        }
    }

    /// Submit a signed transaction and wait for confirmation
    pub async fn send_and_confirm_transaction(
        &self,
        tx: &Transaction,
        last_valid_block_height: u64,
        poll_interval: Duration,
    ) -> Result<String> {
        let signature = self.send_transaction(tx).await?;
        debug!("Submitted {}", signature);

        self.confirm_transaction(&signature, last_valid_block_height, poll_interval)
            .await?;
        Ok(signature)
    }
}
