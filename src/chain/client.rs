//! Read-only JSON-RPC network client.
//!
//! # Responsibilities
//! - Connect to the resolved RPC endpoint
//! - Query network identity (chain id)
//! - Handle timeouts and network errors gracefully
//!
//! No wallet is involved: the target network is resolved independently of
//! whatever chain the wallet currently sits on.

use std::sync::Arc;
use std::time::Duration;

use alloy::providers::{Provider, ProviderBuilder};
use async_trait::async_trait;

use crate::chain::types::{ChainError, ChainId, ChainResult};
use crate::resilience::with_timeout;

/// Source of the target network's identity.
#[async_trait(?Send)]
pub trait NetworkResolver {
    /// Endpoint being queried, for logs and status.
    fn endpoint(&self) -> &str;

    /// Chain id reported by the endpoint.
    async fn chain_id(&self) -> ChainResult<ChainId>;
}

/// alloy-backed RPC client for a single endpoint.
#[derive(Clone)]
pub struct RpcNetworkClient {
    provider: Arc<dyn Provider + Send + Sync>,
    rpc_url: String,
    timeout_duration: Duration,
}

impl RpcNetworkClient {
    /// Create a client for `rpc_url`.
    ///
    /// Does not touch the network; connection errors surface on first query.
    pub fn new(rpc_url: &str, timeout_duration: Duration) -> ChainResult<Self> {
        let url: url::Url = rpc_url.parse().map_err(|e: url::ParseError| ChainError::InvalidUrl {
            url: rpc_url.to_string(),
            reason: e.to_string(),
        })?;

        let provider = Arc::new(ProviderBuilder::new().connect_http(url)) as Arc<dyn Provider + Send + Sync>;

        Ok(Self {
            provider,
            rpc_url: rpc_url.to_string(),
            timeout_duration,
        })
    }
}

#[async_trait(?Send)]
impl NetworkResolver for RpcNetworkClient {
    fn endpoint(&self) -> &str {
        &self.rpc_url
    }

    async fn chain_id(&self) -> ChainResult<ChainId> {
        let chain_id = with_timeout(self.timeout_duration, self.provider.get_chain_id())
            .await
            .map_err(|_| {
                tracing::warn!(rpc_url = %self.rpc_url, "RPC timeout");
                ChainError::Timeout(self.timeout_duration.as_secs())
            })?
            .map_err(|e| {
                tracing::warn!(rpc_url = %self.rpc_url, error = %e, "RPC error");
                ChainError::Rpc(e.to_string())
            })?;

        tracing::debug!(rpc_url = %self.rpc_url, chain_id, "Resolved network identity");
        Ok(ChainId(chain_id))
    }
}

impl std::fmt::Debug for RpcNetworkClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcNetworkClient")
            .field("rpc_url", &self.rpc_url)
            .field("timeout", &self.timeout_duration)
            .finish()
    }
}
