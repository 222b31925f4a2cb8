//! Chain access subsystem.
//!
//! # Data Flow
//! ```text
//! resolved RPC endpoint (config::endpoint)
//!     → client.rs (eth_chainId with timeout)
//!     → TargetNetwork for the wallet switch
//! ```

pub mod client;
pub mod types;

pub use client::{NetworkResolver, RpcNetworkClient};
pub use types::{ChainError, ChainId, ChainResult};
