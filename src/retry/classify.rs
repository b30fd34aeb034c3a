//! Mapping failures onto retry error kinds.

use super::policy::ErrorKind;

/// Implemented by attempt errors that the retry loop can classify.
pub trait Retryable {
    fn error_kind(&self) -> ErrorKind;
}

/// Classify an HTTP status code returned by a repository origin.
pub fn classify_http_status(code: u16) -> ErrorKind {
    match code {
        429 | 503 => ErrorKind::Throttled,
        500..=599 => ErrorKind::Http5xx(code),
        _ => ErrorKind::Other,
    }
}
