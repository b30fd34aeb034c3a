//! The connector contract.
//!
//! A [`RepositoryConnector`] resolves a [`Location`] against one kind of
//! origin and returns the template bytes. A [`ConnectorFactory`] builds a
//! connector from its options section so a registry can be assembled from
//! configuration without knowing the concrete connector types.

use crate::error::FetchError;
use crate::fetch::FetchResult;
use crate::location::Location;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait RepositoryConnector: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Fetches the template at `location`.
    async fn fetch(&self, location: &Location) -> Result<FetchResult, FetchError>;
}

/// Builds connectors of one kind from configuration.
pub trait ConnectorFactory: Send + Sync {
    /// Name referenced by `factory = "..."` in the registry config.
    fn name(&self) -> &str;

    /// Scheme the connector is registered under when the config does not say.
    fn default_scheme(&self) -> &str;

    /// Creates a connector from its `options` table (may be empty).
    fn create(&self, options: toml::Value) -> anyhow::Result<Arc<dyn RepositoryConnector>>;
}
