//! One GET attempt and its retry classification.

use knotx_repository_connector::retry::{classify_http_status, ErrorKind, Retryable};

use crate::transfer::RawResponse;

/// Why an attempt should be considered failed by the retry loop.
#[derive(Debug)]
pub(crate) enum AttemptError {
    /// curl reported an error (timeout, connection, etc.).
    Curl(curl::Error),
    /// The repository answered with a retryable status (429, 5xx).
    Status(RawResponse),
    /// The blocking worker panicked or was cancelled.
    Worker(String),
}

impl AttemptError {
    /// Sorts a completed response: retryable statuses become errors.
    pub(crate) fn check(raw: RawResponse) -> Result<RawResponse, AttemptError> {
        match classify_http_status(raw.status) {
            ErrorKind::Other => Ok(raw),
            _ => Err(AttemptError::Status(raw)),
        }
    }
}

impl Retryable for AttemptError {
    fn error_kind(&self) -> ErrorKind {
        match self {
            AttemptError::Curl(e) => classify_curl_error(e),
            AttemptError::Status(raw) => classify_http_status(raw.status),
            AttemptError::Worker(_) => ErrorKind::Other,
        }
    }
}

/// Classify a curl error for retry decisions.
pub(crate) fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return ErrorKind::Connection;
    }
    ErrorKind::Other
}
