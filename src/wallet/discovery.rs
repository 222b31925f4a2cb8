//! Provider discovery.
//!
//! Wallets inject themselves at known global points. Phantom's EVM provider
//! is checked before the generic `ethereum` slot, since Phantom may also
//! occupy the generic slot.

use std::rc::Rc;
use std::time::Duration;

use crate::config::schema::WalletConfig;
use crate::session::types::{SessionError, SessionResult};
use crate::wallet::http::HttpWalletProvider;
use crate::wallet::provider::ProviderHandle;

/// Something that can be searched for an injected provider.
pub trait ProviderSource {
    /// Return the highest-priority provider currently present.
    fn discover(&self) -> SessionResult<ProviderHandle>;
}

/// Fixed set of injection points, filled at construction time.
#[derive(Clone, Default)]
pub struct InjectionPoints {
    /// Phantom-style provider (`phantom.ethereum`).
    pub phantom: Option<ProviderHandle>,
    /// Generic provider (`ethereum`).
    pub ethereum: Option<ProviderHandle>,
}

impl InjectionPoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_phantom(mut self, provider: ProviderHandle) -> Self {
        self.phantom = Some(provider);
        self
    }

    pub fn with_ethereum(mut self, provider: ProviderHandle) -> Self {
        self.ethereum = Some(provider);
        self
    }

    /// Build injection points from configured wallet endpoints.
    ///
    /// An unparsable URL leaves its slot empty and is logged; validation
    /// normally catches it first.
    pub fn from_config(config: &WalletConfig, timeout: Duration) -> Self {
        let mut points = Self::new();
        if let Some(url) = &config.phantom_url {
            match HttpWalletProvider::new("phantom", url, timeout) {
                Ok(provider) => points.phantom = Some(Rc::new(provider)),
                Err(e) => tracing::warn!(error = %e, "Ignoring phantom wallet endpoint"),
            }
        }
        if let Some(url) = &config.ethereum_url {
            match HttpWalletProvider::new("ethereum", url, timeout) {
                Ok(provider) => points.ethereum = Some(Rc::new(provider)),
                Err(e) => tracing::warn!(error = %e, "Ignoring ethereum wallet endpoint"),
            }
        }
        points
    }
}

impl ProviderSource for InjectionPoints {
    fn discover(&self) -> SessionResult<ProviderHandle> {
        self.phantom
            .as_ref()
            .or(self.ethereum.as_ref())
            .cloned()
            .ok_or(SessionError::NoProviderFound)
    }
}

impl std::fmt::Debug for InjectionPoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InjectionPoints")
            .field("phantom", &self.phantom.as_ref().map(|p| p.name().to_string()))
            .field("ethereum", &self.ethereum.as_ref().map(|p| p.name().to_string()))
            .finish()
    }
}
