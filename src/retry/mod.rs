//! Retry and backoff for remote fetches.
//!
//! Connectors classify their failures into an [`ErrorKind`]; the policy turns
//! the kind and attempt number into a backoff decision.

mod classify;
mod policy;
mod run;

pub use classify::{classify_http_status, Retryable};
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
