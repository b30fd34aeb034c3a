//! Location: what a connector is asked to fetch.
//!
//! Syntax is `<scheme>:<path>[?<query>]`, e.g. `fs:/templates/index.html` or
//! `http:/content/page.html?lang=en`. The scheme is optional; an authority
//! after the scheme (`fs://host/path`) is accepted and ignored since the
//! origin is a property of the connector, not of the location.

use crate::error::FetchError;
use http::header::{HeaderName, HeaderValue};
use http::HeaderMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    scheme: Option<String>,
    path: String,
    /// Query exactly as given, without the leading `?`.
    query: String,
    headers: HeaderMap,
}

impl Location {
    /// Scheme-less location for `path`.
    pub fn new(path: &str) -> Self {
        Self {
            scheme: None,
            path: normalize_path(path),
            query: String::new(),
            headers: HeaderMap::new(),
        }
    }

    pub fn parse(input: &str) -> Result<Self, FetchError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(FetchError::InvalidLocation {
                location: String::new(),
                reason: "empty location".to_string(),
            });
        }

        let (scheme, rest) = match split_scheme(input) {
            Some((scheme, rest)) => (Some(scheme.to_ascii_lowercase()), rest),
            None => (None, input),
        };
        let rest = match rest.strip_prefix("//") {
            Some(authority_and_path) => authority_and_path
                .find('/')
                .map(|i| &authority_and_path[i..])
                .unwrap_or(""),
            None => rest,
        };
        let rest = rest.split_once('#').map(|(r, _)| r).unwrap_or(rest);
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

        Ok(Self {
            scheme,
            path: normalize_path(path),
            query: query.to_string(),
            headers: HeaderMap::new(),
        })
    }

    pub fn with_scheme(mut self, scheme: &str) -> Self {
        self.scheme = Some(scheme.to_ascii_lowercase());
        self
    }

    /// Appends a form-encoded `name=value` pair to the query.
    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        let pair = url::form_urlencoded::Serializer::new(String::new())
            .append_pair(name, value)
            .finish();
        if !self.query.is_empty() {
            self.query.push('&');
        }
        self.query.push_str(&pair);
        self
    }

    /// Adds a request header to forward to the origin (appends, keeps existing values).
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, FetchError> {
        let header_name =
            HeaderName::from_bytes(name.trim().as_bytes()).map_err(|e| self.invalid(e))?;
        let header_value = HeaderValue::from_str(value.trim()).map_err(|e| self.invalid(e))?;
        self.headers.append(header_name, header_value);
        Ok(self)
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Always starts with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Decoded query pairs.
    pub fn params(&self) -> Vec<(String, String)> {
        url::form_urlencoded::parse(self.query.as_bytes())
            .into_owned()
            .collect()
    }

    /// Raw query, `None` when empty.
    pub fn query(&self) -> Option<&str> {
        Some(self.query.as_str()).filter(|q| !q.is_empty())
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Path plus the query as given.
    pub fn uri(&self) -> String {
        match self.query() {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        }
    }

    fn invalid(&self, err: impl fmt::Display) -> FetchError {
        FetchError::InvalidLocation {
            location: self.to_string(),
            reason: err.to_string(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scheme {
            Some(scheme) => write!(f, "{}:{}", scheme, self.uri()),
            None => write!(f, "{}", self.uri()),
        }
    }
}

/// Splits `scheme:rest` when the prefix is a valid URI scheme.
fn split_scheme(input: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = input.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        return None;
    }
    Some((scheme, rest))
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
