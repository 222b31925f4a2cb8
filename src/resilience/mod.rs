//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Wallet request / endpoint query:
//!     → timeouts.rs (deadline on native builds)
//!     → failure surfaces as a status message; nothing is retried
//! ```

pub mod timeouts;

pub use timeouts::{with_timeout, TimedOut};
