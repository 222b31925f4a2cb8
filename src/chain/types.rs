//! Chain identity types and network-client errors.

use std::fmt;

use thiserror::Error;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl ChainId {
    /// Polygon PoS mainnet.
    pub const POLYGON: ChainId = ChainId(137);

    /// Wallet-facing form: lowercase hex with a `0x` prefix.
    pub fn to_hex(self) -> String {
        format!("0x{:x}", self.0)
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors from the read-only network client.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Endpoint URL could not be parsed.
    #[error("Invalid RPC URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),
}

/// Result type for network-client operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Decode a JSON-RPC quantity (`"0x2fcd2c0"`) into an integer.
///
/// Plain JSON numbers are accepted too; some providers return them.
pub fn parse_quantity(value: &serde_json::Value) -> Result<u64, String> {
    match value {
        serde_json::Value::String(s) => {
            let digits = s
                .strip_prefix("0x")
                .or_else(|| s.strip_prefix("0X"))
                .ok_or_else(|| format!("Quantity '{}' is missing the 0x prefix", s))?;
            if digits.is_empty() {
                return Err(format!("Quantity '{}' has no digits", s));
            }
            u64::from_str_radix(digits, 16).map_err(|e| format!("Invalid quantity '{}': {}", s, e))
        }
        serde_json::Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| format!("Quantity {} is not an unsigned integer", n)),
        other => Err(format!("Unexpected quantity value: {}", other)),
    }
}
