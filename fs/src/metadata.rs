//! Response headers derived from a template file.

use chrono::{DateTime, Utc};
use http::header::{self, HeaderValue};
use http::HeaderMap;
use sha2::{Digest, Sha256};
use std::path::Path;
use std::time::SystemTime;

/// Content type for `path` by extension; `None` when the extension is unknown.
pub fn content_type(path: &Path) -> Option<String> {
    mime_guess::from_path(path)
        .first()
        .map(|mime| mime.essence_str().to_string())
}

/// RFC 7231 IMF-fixdate, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`.
pub fn http_date(time: SystemTime) -> String {
    let time: DateTime<Utc> = time.into();
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Strong entity tag: quoted lowercase hex SHA-256 of the content.
pub fn etag(body: &[u8]) -> String {
    let digest = Sha256::digest(body);
    format!("\"{}\"", hex::encode(digest))
}

pub fn response_headers(path: &Path, body: &[u8], modified: Option<SystemTime>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Some(value) = content_type(path).and_then(|ct| HeaderValue::from_str(&ct).ok()) {
        headers.insert(header::CONTENT_TYPE, value);
    }
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(body.len()));
    if let Some(value) = modified.and_then(|t| HeaderValue::from_str(&http_date(t)).ok()) {
        headers.insert(header::LAST_MODIFIED, value);
    }
    if let Ok(value) = HeaderValue::from_str(&etag(body)) {
        headers.insert(header::ETAG, value);
    }
    headers
}
