//! Wallet integration subsystem.
//!
//! # Data Flow
//! ```text
//! injection points (window globals / configured endpoints)
//!     → discovery.rs (Phantom first, then generic)
//!     → provider.rs (EIP-1193 request channel)
//!     → signer.rs (eth_requestAccounts → account-bound Signer)
//! ```
//!
//! # Constraints
//! - Read-only: no transaction signing
//! - Addresses are logged truncated

pub mod discovery;
pub mod http;
pub mod provider;
pub mod signer;

pub use discovery::{InjectionPoints, ProviderSource};
pub use http::HttpWalletProvider;
pub use provider::{ProviderError, ProviderHandle, WalletProvider};
pub use signer::{truncate_address, Signer};
