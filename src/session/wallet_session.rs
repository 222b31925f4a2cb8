//! WalletSession: connect, verify network, read block height.
//!
//! # Flow
//! ```text
//! connect():             discover → eth_requestAccounts → Signer → Connected
//! check_block_height():  Signer? → eth_chainId (endpoint) → wallet_switchEthereumChain
//!                        → eth_blockNumber (wallet) → output
//! ```
//!
//! Every failure is reported on the status line and leaves `UiState`,
//! provider, signer and output as they were. Nothing is retried.

use crate::chain::client::NetworkResolver;
use crate::session::types::{SessionError, SessionResult, TargetNetwork, UiState};
use crate::session::view::SessionView;
use crate::wallet::discovery::ProviderSource;
use crate::wallet::provider::ProviderHandle;
use crate::wallet::signer::Signer;

pub const STATUS_CONNECTING: &str = "Connecting...";
pub const STATUS_CHECKING: &str = "Checking block height...";
pub const STATUS_HEIGHT_FETCHED: &str = "Block height fetched successfully";

/// One page's worth of wallet state.
///
/// Actions take `&mut self`, so at most one runs at a time per session.
pub struct WalletSession<V: SessionView> {
    source: Box<dyn ProviderSource>,
    network: Box<dyn NetworkResolver>,
    view: V,
    provider: Option<ProviderHandle>,
    signer: Option<Signer>,
    target: Option<TargetNetwork>,
    state: UiState,
}

impl<V: SessionView> WalletSession<V> {
    /// Create a disconnected session.
    ///
    /// # Arguments
    /// * `source` - Injection points searched on each connect
    /// * `network` - Client for the RPC endpoint chosen at load
    /// * `view` - Where status/output lines go
    pub fn new(source: Box<dyn ProviderSource>, network: Box<dyn NetworkResolver>, view: V) -> Self {
        Self {
            source,
            network,
            view,
            provider: None,
            signer: None,
            target: None,
            state: UiState::Disconnected,
        }
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn signer(&self) -> Option<&Signer> {
        self.signer.as_ref()
    }

    pub fn provider(&self) -> Option<&ProviderHandle> {
        self.provider.as_ref()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Search the injection points.
    pub fn discover_provider(&self) -> SessionResult<ProviderHandle> {
        let provider = self.source.discover()?;
        tracing::debug!(provider = provider.name(), "Discovered wallet provider");
        Ok(provider)
    }

    /// Connect button handler.
    ///
    /// On success the previous provider and signer, if any, are replaced.
    pub async fn connect(&mut self) -> SessionResult<()> {
        self.view.set_status(STATUS_CONNECTING);

        match self.authorize().await {
            Ok((provider, signer)) => {
                let status = format!("Connected: {}", signer.display_address());
                self.provider = Some(provider);
                self.signer = Some(signer);
                self.state = UiState::Connected;
                self.view.set_status(&status);
                self.view.show_connected();
                tracing::info!(status = %status, "Session connected");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Connect failed");
                self.view.set_status(&format!("Error: {}", e));
                Err(e)
            }
        }
    }

    /// Chain id of the configured endpoint.
    ///
    /// Resolved on first use and kept for the rest of the session.
    pub async fn resolve_target_network(&mut self) -> SessionResult<TargetNetwork> {
        if let Some(target) = &self.target {
            return Ok(target.clone());
        }

        let chain_id = self
            .network
            .chain_id()
            .await
            .map_err(|e| SessionError::NetworkQueryFailed(e.to_string()))?;

        let target = TargetNetwork {
            chain_id,
            endpoint: self.network.endpoint().to_string(),
        };
        tracing::info!(chain_id = %target.chain_id, endpoint = %target.endpoint, "Target network resolved");
        self.target = Some(target.clone());
        Ok(target)
    }

    /// Ask the connected wallet to switch to `target`.
    pub async fn ensure_chain(&self, target: &TargetNetwork) -> SessionResult<()> {
        let signer = self.signer.as_ref().ok_or(SessionError::NotConnected)?;
        signer
            .switch_chain(target.chain_id)
            .await
            .map_err(|e| SessionError::ChainSwitchFailed(e.message))?;
        tracing::info!(chain_id = %target.chain_id, hex = %target.chain_id.to_hex(), "Wallet chain switched");
        Ok(())
    }

    /// Latest block height through the connected wallet.
    pub async fn read_block_height(&self) -> SessionResult<u64> {
        let signer = self.signer.as_ref().ok_or(SessionError::NotConnected)?;
        signer.block_number().await
    }

    /// Block-height button handler.
    pub async fn check_block_height(&mut self) -> SessionResult<u64> {
        self.view.set_status(STATUS_CHECKING);

        let result = self.verified_block_height().await;

        match &result {
            Ok(height) => {
                self.view.set_output(&format!("Current block height: {}", height));
                self.view.set_status(STATUS_HEIGHT_FETCHED);
                tracing::info!(block_height = height, "Block height fetched");
            }
            Err(SessionError::ChainSwitchFailed(message)) => {
                tracing::warn!(error = %message, "Chain switch failed");
                self.view.set_status(&format!("Error switching network: {}", message));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Block height check failed");
                self.view.set_status(&format!("Error: {}", e));
            }
        }
        result
    }
}

impl<V: SessionView> WalletSession<V> {
    async fn authorize(&self) -> SessionResult<(ProviderHandle, Signer)> {
        let provider = self.discover_provider()?;
        let signer = Signer::authorize(provider.clone()).await?;
        Ok((provider, signer))
    }

    async fn verified_block_height(&mut self) -> SessionResult<u64> {
        if self.signer.is_none() {
            return Err(SessionError::NotConnected);
        }
        let target = self.resolve_target_network().await?;
        self.ensure_chain(&target).await?;
        self.read_block_height().await
    }
}

impl<V: SessionView> std::fmt::Debug for WalletSession<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletSession")
            .field("endpoint", &self.network.endpoint())
            .field("state", &self.state)
            .field("signer", &self.signer)
            .field("target", &self.target)
            .finish()
    }
}
