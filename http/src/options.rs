//! Configuration of the HTTP repository connector.
//!
//! Field names are snake_case; the camelCase names of the JSON options used by
//! Knot.x deployments are accepted as aliases.

use knotx_repository_connector::config::RetryConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpRepositoryOptions {
    /// Case-insensitive patterns; a request header is forwarded only if its
    /// name fully matches one of them.
    #[serde(alias = "allowedRequestHeaders")]
    pub allowed_request_headers: Vec<String>,
    /// Header sent with every request to the repository.
    #[serde(alias = "customHttpHeader")]
    pub custom_http_header: Option<CustomHttpHeader>,
    #[serde(alias = "clientOptions")]
    pub client_options: ClientOptions,
    /// Remote location of the repository.
    #[serde(alias = "clientDestination")]
    pub client_destination: ClientDestination,
    /// Retry policy; a single attempt when absent.
    pub retry: Option<RetryConfig>,
}

/// Settings of the underlying HTTP client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    #[serde(alias = "followRedirects")]
    pub follow_redirects: bool,
    #[serde(alias = "maxRedirects")]
    pub max_redirects: u32,
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout.
    pub timeout_secs: u64,
    #[serde(alias = "userAgent")]
    pub user_agent: Option<String>,
    /// Skip TLS peer and host verification.
    #[serde(alias = "trustAll")]
    pub trust_all: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            follow_redirects: true,
            max_redirects: 16,
            connect_timeout_secs: 30,
            timeout_secs: 60,
            user_agent: None,
            trust_all: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientDestination {
    pub scheme: String,
    pub domain: String,
    pub port: u16,
    /// Value of the `Host` header sent to the repository, if set.
    #[serde(alias = "hostHeader")]
    pub host_header: Option<String>,
}

impl Default for ClientDestination {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            domain: "localhost".to_string(),
            port: 80,
            host_header: None,
        }
    }
}

impl ClientDestination {
    /// `scheme://domain:port`, no trailing slash.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.domain, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomHttpHeader {
    pub name: String,
    pub value: String,
}
