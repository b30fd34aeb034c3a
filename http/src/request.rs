//! Building the outgoing request from a location and the connector options.

use anyhow::{Context, Result};
use http::header::HOST;
use knotx_repository_connector::pattern::full_match;
use knotx_repository_connector::Location;
use regex::Regex;
use url::Url;

use crate::options::HttpRepositoryOptions;

/// Request headers allowed to pass through to the repository.
#[derive(Debug, Clone)]
pub(crate) struct HeaderFilter {
    patterns: Vec<Regex>,
}

impl HeaderFilter {
    pub(crate) fn new(exprs: &[String]) -> Result<Self> {
        let patterns = exprs
            .iter()
            .map(|expr| {
                full_match(expr, true)
                    .with_context(|| format!("invalid allowed request header pattern {expr:?}"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub(crate) fn allows(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(name))
    }
}

#[derive(Debug, Clone)]
pub(crate) struct RepoRequest {
    pub url: String,
    /// `(name, value)` in send order.
    pub headers: Vec<(String, String)>,
}

/// Repository URL for `location`; the path is percent-encoded, the query sent as given.
fn request_url(base: &Url, location: &Location) -> String {
    let mut url = base.clone();
    url.set_path(location.path());
    url.set_query(location.query());
    url.into()
}

pub(crate) fn build_request(
    base: &Url,
    options: &HttpRepositoryOptions,
    filter: &HeaderFilter,
    location: &Location,
) -> RepoRequest {
    let url = request_url(base, location);

    let mut headers: Vec<(String, String)> = location
        .headers()
        .iter()
        .filter(|(name, _)| filter.allows(name.as_str()))
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();

    if let Some(custom) = &options.custom_http_header {
        set_header(&mut headers, &custom.name, &custom.value);
    }
    if let Some(host) = options
        .client_destination
        .host_header
        .as_deref()
        .filter(|h| !h.trim().is_empty())
    {
        set_header(&mut headers, HOST.as_str(), host);
    }

    RepoRequest { url, headers }
}

/// Replaces every value of `name` (case-insensitive) with a single `value`.
fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
    headers.push((name.to_string(), value.to_string()));
}
