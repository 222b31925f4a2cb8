//! Session subsystem.
//!
//! # Data Flow
//! ```text
//! button click
//!     → wallet_session.rs (connect / check_block_height)
//!     → wallet::* (provider, signer) and chain::* (target network)
//!     → view.rs (status line, output line, button swap)
//! ```
//!
//! # Design Decisions
//! - Session state lives in one struct, replaced wholesale on reconnect
//! - Errors end at the session boundary as status messages
//! - `Connected` has no way back to `Disconnected`

pub mod types;
pub mod view;
pub mod wallet_session;

pub use types::{SessionError, SessionResult, TargetNetwork, UiState};
pub use view::{ConsoleView, MemoryView, SessionView};
pub use wallet_session::WalletSession;
