//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Every endpoint URL must parse as http(s)
//! - Candidate list non-empty, timeout > 0
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>

use std::fmt;

use crate::config::schema::AppConfig;

/// One semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let network = &config.network;

    check_url(&mut errors, "network.local_rpc_url", &network.local_rpc_url);

    if network.rpc_urls.is_empty() {
        errors.push(ValidationError::new("network.rpc_urls", "at least one candidate is required"));
    }
    for (i, url) in network.rpc_urls.iter().enumerate() {
        check_url(&mut errors, &format!("network.rpc_urls[{}]", i), url);
    }

    if let Some(url) = &network.rpc_url {
        check_url(&mut errors, "network.rpc_url", url);
    }

    if network.request_timeout_secs == 0 {
        errors.push(ValidationError::new("network.request_timeout_secs", "must be greater than 0"));
    }

    if let Some(url) = &config.wallet.phantom_url {
        check_url(&mut errors, "wallet.phantom_url", url);
    }
    if let Some(url) = &config.wallet.ethereum_url {
        check_url(&mut errors, "wallet.ethereum_url", url);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_url(errors: &mut Vec<ValidationError>, field: &str, value: &str) {
    match url::Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::new(
            field,
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new(field, format!("invalid URL '{}': {}", value, e))),
    }
}
