//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → endpoint.rs (pick the RPC endpoint once)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod endpoint;
pub mod loader;
pub mod schema;
pub mod validation;

pub use endpoint::{resolve_rpc_endpoint, EndpointSource, RpcEndpoint};
pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{AppConfig, LoggingConfig, NetworkConfig, WalletConfig};
