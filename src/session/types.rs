//! Session state and error taxonomy.

use thiserror::Error;

use crate::chain::ChainId;

/// Shown when neither injection point carries a provider.
pub const NO_PROVIDER_MESSAGE: &str = "No Web3 provider found. Please install MetaMask or Phantom.";

/// Two-state projection of the session onto the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    /// Connect action visible.
    #[default]
    Disconnected,
    /// Block-height action visible. Terminal for the session.
    Connected,
}

/// Chain the wallet is asked to switch to, resolved from the RPC endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetNetwork {
    pub chain_id: ChainId,
    /// Endpoint the chain id was read from.
    pub endpoint: String,
}

/// Errors surfaced by session actions.
///
/// Each variant displays the underlying message only; the session adds the
/// `Error:` prefix when it writes the status line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Neither injection point is present.
    #[error("{}", NO_PROVIDER_MESSAGE)]
    NoProviderFound,

    /// The user declined account access, or the wallet returned no account.
    #[error("{0}")]
    AuthorizationRejected(String),

    /// The wallet refused or failed the chain switch.
    #[error("{0}")]
    ChainSwitchFailed(String),

    /// Transport or RPC failure talking to the wallet or the endpoint.
    #[error("{0}")]
    NetworkQueryFailed(String),

    /// A response could not be decoded.
    #[error("{0}")]
    InvalidResponse(String),

    /// A chain query was attempted without a signer.
    #[error("Wallet not connected")]
    NotConnected,
}

/// Result type for session actions.
pub type SessionResult<T> = Result<T, SessionError>;
