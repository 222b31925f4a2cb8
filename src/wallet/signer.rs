//! Account-bound signer derived from an authorized provider.

use std::str::FromStr;

use alloy::primitives::Address;
use serde_json::{json, Value};

use crate::chain::types::{parse_quantity, ChainId};
use crate::session::types::{SessionError, SessionResult};
use crate::wallet::provider::{methods, ProviderError, ProviderHandle};

/// Short display form: first 6 and last 4 characters joined by `...`.
pub fn truncate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    let head: String = chars.iter().take(6).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Connected account plus the provider it was authorized on.
#[derive(Clone)]
pub struct Signer {
    provider: ProviderHandle,
    /// Address as the wallet returned it; casing is preserved for display.
    address: String,
}

impl Signer {
    /// Request account access and bind to the first authorized account.
    ///
    /// May prompt the user out-of-band. A rejected prompt maps to
    /// `AuthorizationRejected`; anything else on the wire to `NetworkQueryFailed`.
    pub async fn authorize(provider: ProviderHandle) -> SessionResult<Self> {
        let accounts = provider
            .request(methods::REQUEST_ACCOUNTS, None)
            .await
            .map_err(authorization_error)?;

        let address = first_account(&accounts)?;

        tracing::info!(
            provider = provider.name(),
            account = %truncate_address(&address),
            "Wallet authorized"
        );

        Ok(Self { provider, address })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn display_address(&self) -> String {
        truncate_address(&self.address)
    }

    pub fn provider(&self) -> &ProviderHandle {
        &self.provider
    }

    /// Ask the wallet to make `chain_id` its active chain.
    pub async fn switch_chain(&self, chain_id: ChainId) -> Result<(), ProviderError> {
        let params = json!([{ "chainId": chain_id.to_hex() }]);
        self.provider
            .request(methods::SWITCH_CHAIN, Some(params))
            .await
            .map(|_| ())
    }

    /// Latest block number as seen by the wallet's provider.
    pub async fn block_number(&self) -> SessionResult<u64> {
        let value = self
            .provider
            .request(methods::BLOCK_NUMBER, None)
            .await
            .map_err(|e| SessionError::NetworkQueryFailed(e.message))?;
        parse_quantity(&value).map_err(SessionError::InvalidResponse)
    }
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("provider", &self.provider.name())
            .field("address", &self.display_address())
            .finish()
    }
}

fn authorization_error(e: ProviderError) -> SessionError {
    if e.is_user_rejection() {
        SessionError::AuthorizationRejected(e.message)
    } else {
        SessionError::NetworkQueryFailed(e.message)
    }
}

fn first_account(accounts: &Value) -> SessionResult<String> {
    let first = accounts
        .as_array()
        .and_then(|list| list.first())
        .ok_or_else(|| SessionError::AuthorizationRejected("No accounts authorized".to_string()))?;

    let address = first.as_str().ok_or_else(|| {
        SessionError::InvalidResponse(format!("Account entry is not a string: {}", first))
    })?;

    Address::from_str(address)
        .map_err(|e| SessionError::InvalidResponse(format!("Invalid account address '{}': {}", address, e)))?;

    Ok(address.to_string())
}
