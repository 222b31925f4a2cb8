//! Timeout enforcement for outbound RPC calls.
//!
//! Native builds bound every wallet/endpoint request with Tokio's timer.
//! The browser build has no timer here and awaits the call as-is, so a hung
//! wallet prompt stays pending.

use std::future::IntoFuture;
use std::time::Duration;

use thiserror::Error;

/// The wrapped call did not finish in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Request timed out after {} seconds", .0.as_secs())]
pub struct TimedOut(pub Duration);

/// Await `fut`, giving up after `limit`.
#[cfg(not(target_arch = "wasm32"))]
pub async fn with_timeout<F: IntoFuture>(limit: Duration, fut: F) -> Result<F::Output, TimedOut> {
    tokio::time::timeout(limit, fut)
        .await
        .map_err(|_| TimedOut(limit))
}

#[cfg(target_arch = "wasm32")]
pub async fn with_timeout<F: IntoFuture>(_limit: Duration, fut: F) -> Result<F::Output, TimedOut> {
    Ok(fut.await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_completes_within_limit() {
        let result = with_timeout(Duration::from_secs(1), async { 7 }).await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_times_out() {
        let slow = tokio::time::sleep(Duration::from_secs(60));
        let result = with_timeout(Duration::from_secs(30), slow).await;
        let err = result.unwrap_err();
        assert_eq!(err, TimedOut(Duration::from_secs(30)));
        assert_eq!(err.to_string(), "Request timed out after 30 seconds");
    }
}
