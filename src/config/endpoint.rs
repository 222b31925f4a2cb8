//! RPC endpoint resolution.
//!
//! Chosen once at load: an explicit override wins, a local hostname selects
//! the development node, anything else gets a uniform random pick from the
//! candidate list. The RNG is passed in so callers can seed it.

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::config::schema::NetworkConfig;

/// Hostnames treated as a local development context.
pub const LOCAL_HOSTNAMES: [&str; 2] = ["localhost", "127.0.0.1"];

/// How an endpoint was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointSource {
    /// `network.rpc_url` was set.
    Override,
    /// Local development context.
    Local,
    /// Random pick; index into the candidate list.
    Candidate(usize),
}

/// The endpoint the target network is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcEndpoint {
    pub url: String,
    pub source: EndpointSource,
}

/// True for `localhost` and `127.0.0.1`.
pub fn is_local_context(hostname: &str) -> bool {
    LOCAL_HOSTNAMES.contains(&hostname)
}

/// Pick the RPC endpoint for this session.
pub fn resolve_rpc_endpoint<R: Rng + ?Sized>(
    hostname: Option<&str>,
    config: &NetworkConfig,
    rng: &mut R,
) -> RpcEndpoint {
    if let Some(url) = &config.rpc_url {
        return RpcEndpoint {
            url: url.clone(),
            source: EndpointSource::Override,
        };
    }

    let local = RpcEndpoint {
        url: config.local_rpc_url.clone(),
        source: EndpointSource::Local,
    };

    if hostname.is_some_and(is_local_context) {
        return local;
    }

    match config.rpc_urls.iter().enumerate().choose(rng) {
        Some((i, url)) => RpcEndpoint {
            url: url.clone(),
            source: EndpointSource::Candidate(i),
        },
        None => {
            tracing::warn!("No RPC candidates configured, falling back to local endpoint");
            local
        }
    }
}
