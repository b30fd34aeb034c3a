//! Async retry loop.

use std::future::Future;

use super::classify::Retryable;
use super::policy::{RetryDecision, RetryPolicy};

/// Runs `attempt` until it succeeds or the policy gives up; returns the last error.
pub async fn run_with_retry<T, E, F, Fut>(policy: &RetryPolicy, mut attempt: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Retryable,
{
    let mut n = 1u32;
    loop {
        match attempt().await {
            Ok(value) => return Ok(value),
            Err(e) => match policy.decide(n, e.error_kind()) {
                RetryDecision::NoRetry => return Err(e),
                RetryDecision::RetryAfter(delay) => {
                    tracing::debug!(attempt = n, ?delay, "retrying after failed attempt");
                    tokio::time::sleep(delay).await;
                    n += 1;
                }
            },
        }
    }
}
