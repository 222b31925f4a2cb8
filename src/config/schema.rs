//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML. Every field
//! has a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

/// Local development endpoint.
pub const DEFAULT_LOCAL_RPC_URL: &str = "http://127.0.0.1:8545";

/// Public Polygon endpoints picked from when not running locally.
pub const DEFAULT_RPC_URLS: [&str; 5] = [
    "https://polygon.llamarpc.com",
    "https://polygon.rpc.subquery.network/public",
    "https://polygon.drpc.org",
    "https://polygon-rpc.com",
    "https://1rpc.io/matic",
];

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Target network endpoint selection.
    pub network: NetworkConfig,

    /// Wallet injection points.
    pub wallet: WalletConfig,

    /// Logging settings.
    pub logging: LoggingConfig,
}

/// RPC endpoint selection.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    /// Host the page is served from; `localhost`/`127.0.0.1` select the
    /// local endpoint. Unset means a non-local context.
    pub hostname: Option<String>,

    /// Endpoint used in a local development context.
    pub local_rpc_url: String,

    /// Candidates for a uniformly random pick otherwise.
    pub rpc_urls: Vec<String>,

    /// Fixed endpoint; bypasses environment detection and the random pick.
    pub rpc_url: Option<String>,

    /// Deadline for each RPC and wallet request (native builds).
    pub request_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            hostname: None,
            local_rpc_url: DEFAULT_LOCAL_RPC_URL.to_string(),
            rpc_urls: DEFAULT_RPC_URLS.iter().map(|u| u.to_string()).collect(),
            rpc_url: None,
            request_timeout_secs: 30,
        }
    }
}

/// Wallet endpoints standing in for browser injection points.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct WalletConfig {
    /// Phantom-style provider; preferred when set.
    pub phantom_url: Option<String>,

    /// Generic provider.
    pub ethereum_url: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "wallet_height=info".to_string(),
            json: false,
        }
    }
}
