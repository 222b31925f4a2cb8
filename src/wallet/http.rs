//! HTTP-backed wallet provider.
//!
//! Forwards EIP-1193 requests as JSON-RPC 2.0 calls to an endpoint that
//! answers the wallet vocabulary (a dev node with unlocked accounts, a
//! remote signer). Native stand-in for a browser-injected provider.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resilience::with_timeout;
use crate::wallet::provider::{ProviderError, WalletProvider};

#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcErrorObject {
    code: i64,
    message: String,
}

/// Wallet provider speaking JSON-RPC over HTTP.
#[derive(Debug)]
pub struct HttpWalletProvider {
    name: String,
    url: url::Url,
    client: reqwest::Client,
    timeout: Duration,
    next_id: AtomicU64,
}

impl HttpWalletProvider {
    /// Create a provider for `url`.
    ///
    /// # Arguments
    /// * `name` - Label used in logs
    /// * `url` - JSON-RPC endpoint
    /// * `timeout` - Per-request deadline (native builds only)
    pub fn new(name: impl Into<String>, url: &str, timeout: Duration) -> Result<Self, ProviderError> {
        let url = url::Url::parse(url)
            .map_err(|e| ProviderError::new(format!("Invalid wallet URL '{}': {}", url, e)))?;
        Ok(Self {
            name: name.into(),
            url,
            client: reqwest::Client::new(),
            timeout,
            next_id: AtomicU64::new(1),
        })
    }

    /// Endpoint this provider forwards to.
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    async fn send(&self, body: &JsonRpcRequest<'_>) -> Result<JsonRpcResponse, ProviderError> {
        let response = self
            .client
            .post(self.url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| ProviderError::new(format!("Wallet request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::new(format!(
                "Wallet endpoint returned HTTP {}",
                status
            )));
        }

        response
            .json::<JsonRpcResponse>()
            .await
            .map_err(|e| ProviderError::new(format!("Malformed wallet response: {}", e)))
    }
}

#[async_trait(?Send)]
impl WalletProvider for HttpWalletProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn request(&self, method: &str, params: Option<Value>) -> Result<Value, ProviderError> {
        let body = JsonRpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params: params.unwrap_or_else(|| Value::Array(Vec::new())),
        };

        tracing::debug!(provider = %self.name, method, id = body.id, "Sending wallet request");

        let response = with_timeout(self.timeout, self.send(&body))
            .await
            .map_err(|e| ProviderError::new(e.to_string()))??;

        if let Some(error) = response.error {
            tracing::debug!(
                provider = %self.name,
                method,
                code = error.code,
                message = %error.message,
                "Wallet request rejected"
            );
            return Err(ProviderError::with_code(error.code, error.message));
        }

        Ok(response.result.unwrap_or(Value::Null))
    }
}
