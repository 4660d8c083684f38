//! JSON-RPC client for the devnet faucet endpoint.
//!
//! Issues `requestAirdrop` over HTTP POST and interprets the response
//! envelope. The `AirdropEndpoint` trait is the seam the requester drives;
//! `RpcClient` is its production implementor.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{AirdropError, Result};

/// Devnet RPC endpoint.
pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";

/// Lamports per whole SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Fixed airdrop amount in lamports (2 SOL). Not user-configurable.
pub const AIRDROP_LAMPORTS: u64 = 2 * LAMPORTS_PER_SOL;

/// Confirmation polling: one attempt per second, up to 30 seconds.
const CONFIRM_POLL_ATTEMPTS: u32 = 30;

/// JSON-RPC 2.0 request envelope with fixed `id` and positional params.
#[derive(Debug, Serialize)]
struct RpcRequest<P: Serialize> {
    jsonrpc: &'static str,
    id: u32,
    method: &'static str,
    params: P,
}

impl<P: Serialize> RpcRequest<P> {
    fn new(method: &'static str, params: P) -> Self {
        Self {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        }
    }
}

/// Parsed airdrop response from a 2xx reply.
///
/// Classification is by presence of a non-empty `result` field only; an
/// `error` field riding on a 2xx envelope is not inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirdropReply {
    /// Raw `result` field, the transaction signature when present.
    pub result: Option<String>,
}

impl AirdropReply {
    /// Build a reply from a decoded response body.
    pub fn from_value(body: &serde_json::Value) -> Self {
        Self {
            result: body
                .get("result")
                .and_then(|r| r.as_str())
                .map(str::to_owned),
        }
    }

    /// The transaction signature, if the faucet accepted the request.
    pub fn signature(&self) -> Option<&str> {
        self.result.as_deref().filter(|s| !s.is_empty())
    }
}

/// Extract the nested `error.message` string from a response body, if any.
fn rpc_error_message(body: &serde_json::Value) -> Option<&str> {
    body.get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
}

/// Remote faucet seam.
///
/// Mirrors the one outbound call the requester is allowed to make, so tests
/// can substitute a scripted endpoint.
#[async_trait]
pub trait AirdropEndpoint: Send + Sync {
    /// Issue a single airdrop request for `lamports` to `address`.
    ///
    /// `Ok` carries the parsed 2xx envelope; `Err` is a rejection, with the
    /// endpoint's structured diagnostic preferred over transport text.
    async fn request_airdrop(&self, address: &str, lamports: u64) -> Result<AirdropReply>;
}

#[async_trait]
impl<T: AirdropEndpoint + ?Sized> AirdropEndpoint for std::sync::Arc<T> {
    async fn request_airdrop(&self, address: &str, lamports: u64) -> Result<AirdropReply> {
        (**self).request_airdrop(address, lamports).await
    }
}

/// Faucet client for requesting test tokens.
pub struct RpcClient {
    http_client: reqwest::Client,
    rpc_url: String,
}

impl RpcClient {
    /// Create a new client against the given RPC URL.
    pub fn new(rpc_url: &str) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            rpc_url: rpc_url.to_string(),
        }
    }

    /// Create a client for Devnet.
    pub fn devnet() -> Self {
        Self::new(DEVNET_RPC_URL)
    }

    /// The RPC URL this client talks to.
    pub fn url(&self) -> &str {
        &self.rpc_url
    }

    /// Get current lamport balance for an address.
    pub async fn get_balance(&self, address: &str) -> Result<u64> {
        let request = RpcRequest::new("getBalance", (address.to_string(),));

        let response = self
            .http_client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AirdropError::Transport {
                reason: format!("Balance request failed: {}", e),
            })?;

        let body: serde_json::Value = response.json().await.map_err(|e| {
            AirdropError::Transport {
                reason: format!("Failed to parse balance response: {}", e),
            }
        })?;

        body.get("result")
            .and_then(|r| r.get("value"))
            .and_then(|v| v.as_u64())
            .ok_or_else(|| AirdropError::Transport {
                reason: "Invalid balance response".to_string(),
            })
    }

    /// Confirm a transaction by polling for status.
    ///
    /// Returns `true` once the signature reaches `confirmed` or `finalized`,
    /// `false` if it never does within the polling window.
    pub async fn confirm_transaction(&self, signature: &str) -> Result<bool> {
        let request = RpcRequest::new("getSignatureStatuses", (vec![signature.to_string()],));

        for _ in 0..CONFIRM_POLL_ATTEMPTS {
            let response = self
                .http_client
                .post(&self.rpc_url)
                .json(&request)
                .send()
                .await
                .map_err(|e| AirdropError::Transport {
                    reason: format!("Confirmation check failed: {}", e),
                })?;

            let body: serde_json::Value = response.json().await.map_err(|e| {
                AirdropError::Transport {
                    reason: format!("Failed to parse confirmation response: {}", e),
                }
            })?;

            let confirmed = body
                .get("result")
                .and_then(|r| r.get("value"))
                .and_then(|v| v.as_array())
                .and_then(|statuses| statuses.first())
                .and_then(|s| s.get("confirmationStatus"))
                .and_then(|c| c.as_str())
                .map(|c| c == "confirmed" || c == "finalized")
                .unwrap_or(false);

            if confirmed {
                return Ok(true);
            }

            tokio::time::sleep(Duration::from_secs(1)).await;
        }

        Ok(false)
    }
}

#[async_trait]
impl AirdropEndpoint for RpcClient {
    async fn request_airdrop(&self, address: &str, lamports: u64) -> Result<AirdropReply> {
        tracing::debug!(address, lamports, url = %self.rpc_url, "requesting airdrop");

        let request = RpcRequest::new("requestAirdrop", (address.to_string(), lamports));

        let response = self
            .http_client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AirdropError::Transport {
                reason: e.to_string(),
            })?;

        let status = response.status();
        let body: serde_json::Value = match response.json().await {
            Ok(body) => body,
            Err(e) if status.is_success() => {
                return Err(AirdropError::Transport {
                    reason: format!("Failed to parse airdrop response: {}", e),
                });
            }
            Err(_) => {
                return Err(AirdropError::Transport {
                    reason: format!("Server returned {}", status),
                });
            }
        };

        if !status.is_success() {
            // The endpoint's own diagnostic takes priority over the status line.
            if let Some(message) = rpc_error_message(&body) {
                tracing::warn!(%status, message, "airdrop rejected");
                return Err(AirdropError::Rpc {
                    message: message.to_string(),
                });
            }
            return Err(AirdropError::Transport {
                reason: format!("Server returned {}", status),
            });
        }

        Ok(AirdropReply::from_value(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let client = RpcClient::new("https://api.devnet.solana.com");
        assert!(!client.url().is_empty());
    }

    #[test]
    fn test_client_devnet() {
        let client = RpcClient::devnet();
        assert_eq!(client.url(), DEVNET_RPC_URL);
    }

    #[test]
    fn test_airdrop_request_wire_shape() {
        let request = RpcRequest::new(
            "requestAirdrop",
            ("4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T".to_string(), AIRDROP_LAMPORTS),
        );

        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(
            encoded,
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "requestAirdrop",
                "params": ["4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T", 2_000_000_000u64],
            })
        );
    }

    #[test]
    fn test_signature_status_wire_shape() {
        let request = RpcRequest::new("getSignatureStatuses", (vec!["abc".to_string()],));
        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(encoded["params"], json!([["abc"]]));
    }

    #[test]
    fn test_reply_with_signature() {
        let reply = AirdropReply::from_value(&json!({"jsonrpc": "2.0", "id": 1, "result": "abc123sig"}));
        assert_eq!(reply.signature(), Some("abc123sig"));
    }

    #[test]
    fn test_reply_null_result_has_no_signature() {
        let reply = AirdropReply::from_value(&json!({"jsonrpc": "2.0", "id": 1, "result": null}));
        assert_eq!(reply.signature(), None);
    }

    #[test]
    fn test_reply_absent_result_has_no_signature() {
        let reply = AirdropReply::from_value(&json!({"jsonrpc": "2.0", "id": 1}));
        assert_eq!(reply.signature(), None);
    }

    #[test]
    fn test_reply_empty_result_has_no_signature() {
        let reply = AirdropReply::from_value(&json!({"result": ""}));
        assert_eq!(reply.signature(), None);
    }

    #[test]
    fn test_error_message_extraction() {
        let body = json!({"error": {"code": -32005, "message": "rate limited"}});
        assert_eq!(rpc_error_message(&body), Some("rate limited"));
    }

    #[test]
    fn test_error_message_missing() {
        assert_eq!(rpc_error_message(&json!({"error": {"code": -32005}})), None);
        assert_eq!(rpc_error_message(&json!({"result": "sig"})), None);
    }
}
