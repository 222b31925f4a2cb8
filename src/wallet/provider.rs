//! EIP-1193 provider abstraction.
//!
//! Injected wallets expose a single `request({ method, params })` entry point.
//! Everything the session needs from a wallet goes through [`WalletProvider::request`].

use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// EIP-1193 error code for "user rejected the request".
pub const USER_REJECTED_CODE: i64 = 4001;

/// Request methods sent to the wallet.
pub mod methods {
    pub const REQUEST_ACCOUNTS: &str = "eth_requestAccounts";
    pub const SWITCH_CHAIN: &str = "wallet_switchEthereumChain";
    pub const BLOCK_NUMBER: &str = "eth_blockNumber";
    pub const CHAIN_ID: &str = "eth_chainId";
}

/// Error delivered by a provider request.
///
/// Mirrors the `{ code, message }` shape wallets throw; `message` is what
/// ends up in the status line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProviderError {
    /// Numeric EIP-1193 / JSON-RPC error code, when the provider sent one.
    pub code: Option<i64>,
    /// Human-readable message.
    pub message: String,
}

impl ProviderError {
    /// Error without a code (transport failures, malformed responses).
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: i64, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }

    /// True when the user declined the prompt.
    pub fn is_user_rejection(&self) -> bool {
        self.code == Some(USER_REJECTED_CODE)
    }
}

/// Request/response channel to a wallet.
///
/// Futures are not required to be `Send`: browser providers wrap `JsValue`s.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Short name used in logs ("phantom", "ethereum", ...).
    fn name(&self) -> &str;

    /// Send one request and wait for its result.
    async fn request(&self, method: &str, params: Option<Value>) -> Result<Value, ProviderError>;
}

/// Shared handle to the discovered provider.
pub type ProviderHandle = Rc<dyn WalletProvider>;
