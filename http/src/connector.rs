use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use knotx_repository_connector::retry::{run_with_retry, RetryPolicy};
use knotx_repository_connector::{FetchError, FetchResult, Location, RepositoryConnector};
use url::Url;

use crate::attempt::AttemptError;
use crate::options::HttpRepositoryOptions;
use crate::request::{build_request, HeaderFilter, RepoRequest};
use crate::response::{from_curl_error, into_fetch_result, parse_headers};
use crate::transfer::{perform_get, RawResponse};

/// Connector fetching templates from a remote HTTP repository.
#[derive(Debug, Clone)]
pub struct HttpRepositoryConnector {
    options: HttpRepositoryOptions,
    base: Url,
    filter: HeaderFilter,
    retry: RetryPolicy,
}

impl HttpRepositoryConnector {
    /// Validates the destination and compiles the allowed header patterns.
    pub fn new(options: HttpRepositoryOptions) -> Result<Self> {
        let destination = &options.client_destination;
        if !matches!(destination.scheme.as_str(), "http" | "https") {
            bail!(
                "unsupported repository scheme {:?} (expected http or https)",
                destination.scheme
            );
        }
        if destination.domain.trim().is_empty() {
            bail!("repository domain must not be empty");
        }

        let filter = HeaderFilter::new(&options.allowed_request_headers)?;
        let retry = match &options.retry {
            Some(retry) => retry.to_policy()?,
            None => RetryPolicy::single_attempt(),
        };
        let base = Url::parse(&destination.base_url())
            .with_context(|| format!("invalid repository address {}", destination.base_url()))?;
        Ok(Self {
            options,
            base,
            filter,
            retry,
        })
    }

    async fn get(&self, request: &RepoRequest) -> Result<RawResponse, AttemptError> {
        run_with_retry(&self.retry, || {
            let request = request.clone();
            let client = self.options.client_options.clone();
            async move {
                let raw = tokio::task::spawn_blocking(move || perform_get(&request, &client))
                    .await
                    .map_err(|e| AttemptError::Worker(e.to_string()))?
                    .map_err(AttemptError::Curl)?;
                AttemptError::check(raw)
            }
        })
        .await
    }
}

#[async_trait]
impl RepositoryConnector for HttpRepositoryConnector {
    fn name(&self) -> &str {
        "http-repository"
    }

    async fn fetch(&self, location: &Location) -> Result<FetchResult, FetchError> {
        let request = build_request(&self.base, &self.options, &self.filter, location);
        tracing::debug!(
            "Fetching template `{}` from HTTP repository ({} forwarded headers)",
            request.url,
            request.headers.len()
        );

        let outcome = match self.get(&request).await {
            Ok(raw) | Err(AttemptError::Status(raw)) => {
                tracing::trace!(
                    status = raw.status,
                    headers = ?parse_headers(&raw.header_lines),
                    "HTTP repository response"
                );
                into_fetch_result(&request.url, raw)
            }
            Err(AttemptError::Curl(e)) => Err(from_curl_error(&request.url, &e)),
            Err(AttemptError::Worker(msg)) => Err(FetchError::transport(&request.url, msg)),
        };

        if let Err(e) = &outcome {
            tracing::error!("{}", e);
        }
        outcome
    }
}
