//! Dispatcher selecting the connector that handles a location.
//!
//! Resolution order: the location's scheme, then path routes in the order
//! they were added, then the default connector.

mod config;

pub use config::{ConnectorEntry, RegistryConfig};

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::connector::RepositoryConnector;
use crate::error::FetchError;
use crate::fetch::FetchResult;
use crate::location::Location;
use crate::pattern::full_match;

struct Route {
    pattern: Regex,
    connector: Arc<dyn RepositoryConnector>,
}

#[derive(Default)]
pub struct ConnectorRegistry {
    by_scheme: HashMap<String, Arc<dyn RepositoryConnector>>,
    routes: Vec<Route>,
    default: Option<Arc<dyn RepositoryConnector>>,
}

impl ConnectorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `connector` for locations with `scheme` (case-insensitive).
    pub fn register(&mut self, scheme: &str, connector: Arc<dyn RepositoryConnector>) -> Result<()> {
        let scheme = scheme.trim().to_ascii_lowercase();
        if scheme.is_empty() {
            bail!("connector {} registered with an empty scheme", connector.name());
        }
        if let Some(existing) = self.by_scheme.get(&scheme) {
            bail!(
                "scheme {scheme:?} already handled by connector {}",
                existing.name()
            );
        }
        tracing::debug!(scheme = %scheme, connector = connector.name(), "registered connector");
        self.by_scheme.insert(scheme, connector);
        Ok(())
    }

    /// Routes locations whose whole path matches `pattern` to `connector`.
    pub fn route(&mut self, pattern: &str, connector: Arc<dyn RepositoryConnector>) -> Result<()> {
        let pattern = full_match(pattern, false)
            .with_context(|| format!("invalid route pattern {pattern:?}"))?;
        self.routes.push(Route { pattern, connector });
        Ok(())
    }

    pub fn set_default(&mut self, connector: Arc<dyn RepositoryConnector>) {
        self.default = Some(connector);
    }

    pub fn schemes(&self) -> Vec<&str> {
        let mut schemes: Vec<&str> = self.by_scheme.keys().map(String::as_str).collect();
        schemes.sort_unstable();
        schemes
    }

    pub fn is_empty(&self) -> bool {
        self.by_scheme.is_empty() && self.routes.is_empty() && self.default.is_none()
    }

    pub fn resolve(&self, location: &Location) -> Result<&Arc<dyn RepositoryConnector>, FetchError> {
        if let Some(connector) = location.scheme().and_then(|s| self.by_scheme.get(s)) {
            return Ok(connector);
        }
        if let Some(route) = self
            .routes
            .iter()
            .find(|r| r.pattern.is_match(location.path()))
        {
            return Ok(&route.connector);
        }
        self.default.as_ref().ok_or_else(|| FetchError::Unroutable {
            location: location.to_string(),
        })
    }
}

#[async_trait]
impl RepositoryConnector for ConnectorRegistry {
    fn name(&self) -> &str {
        "registry"
    }

    async fn fetch(&self, location: &Location) -> Result<FetchResult, FetchError> {
        let connector = self.resolve(location).map_err(|e| {
            tracing::warn!("{}", e);
            e
        })?;
        tracing::debug!(%location, connector = connector.name(), "dispatching fetch");
        connector.fetch(location).await
    }
}

impl fmt::Debug for ConnectorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectorRegistry")
            .field("schemes", &self.schemes())
            .field(
                "routes",
                &self.routes.iter().map(|r| r.pattern.as_str()).collect::<Vec<_>>(),
            )
            .field("default", &self.default.as_ref().map(|c| c.name()))
            .finish()
    }
}
