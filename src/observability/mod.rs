//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! session / wallet / chain
//!     → tracing events with structured fields
//!     → logging.rs subscriber (stdout, pretty or JSON)
//! ```
//!
//! The browser build logs to the devtools console instead (see `wasm`).

#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
