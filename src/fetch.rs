//! Successful fetch outcome: status, response headers and body bytes.

use http::header::{self, HeaderName, HeaderValue};
use http::{HeaderMap, StatusCode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl FetchResult {
    /// `200 OK` with `body` and no headers.
    pub fn ok(body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body,
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Sets (replaces) a header.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header_str(header::CONTENT_TYPE)
    }

    pub fn last_modified(&self) -> Option<&str> {
        self.header_str(header::LAST_MODIFIED)
    }

    pub fn etag(&self) -> Option<&str> {
        self.header_str(header::ETAG)
    }

    pub fn is_redirect(&self) -> bool {
        self.status.is_redirection()
    }

    pub fn body_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    fn header_str(&self, name: HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_defaults() {
        let r = FetchResult::ok(b"<html/>".to_vec());
        assert_eq!(r.status, StatusCode::OK);
        assert!(r.headers.is_empty());
        assert_eq!(r.body_str(), "<html/>");
        assert!(r.content_type().is_none());
    }

    #[test]
    fn metadata_accessors() {
        let r = FetchResult::ok(Vec::new())
            .with_status(StatusCode::MOVED_PERMANENTLY)
            .with_header(header::CONTENT_TYPE, HeaderValue::from_static("text/html"))
            .with_header(header::ETAG, HeaderValue::from_static("\"abc\""))
            .with_header(
                header::LAST_MODIFIED,
                HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"),
            );
        assert!(r.is_redirect());
        assert_eq!(r.content_type(), Some("text/html"));
        assert_eq!(r.etag(), Some("\"abc\""));
        assert_eq!(r.last_modified(), Some("Wed, 21 Oct 2015 07:28:00 GMT"));
    }
}
