//! Web3 wallet session: connect a wallet, switch it to the chain of the
//! selected RPC endpoint, and read the current block height.

pub mod chain;
pub mod config;
pub mod observability;
pub mod resilience;
pub mod session;
pub mod wallet;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub mod wasm;

pub use config::schema::AppConfig;
pub use session::{SessionError, UiState, WalletSession};
