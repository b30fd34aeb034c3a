//! Registry configuration: which factories to instantiate and how to route to them.
//!
//! ```toml
//! [[connectors]]
//! factory = "fsRepoConnectorHandler"
//! scheme = "fs"
//! routes = ["/static/.*"]
//! default = true
//!
//! [connectors.options]
//! catalogue = "/srv/templates"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::ConnectorRegistry;
use crate::connector::ConnectorFactory;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub connectors: Vec<ConnectorEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorEntry {
    /// Factory name, e.g. `httpRepoConnectorHandler`.
    pub factory: String,
    /// Scheme to register under; the factory's default scheme when absent.
    #[serde(default)]
    pub scheme: Option<String>,
    /// Path patterns routed to this connector.
    #[serde(default)]
    pub routes: Vec<String>,
    /// Use this connector when nothing else matches.
    #[serde(default)]
    pub default: bool,
    /// Connector-specific options, passed to the factory as-is.
    #[serde(default = "empty_options")]
    pub options: toml::Value,
}

fn empty_options() -> toml::Value {
    toml::Value::Table(toml::map::Map::new())
}

impl RegistryConfig {
    /// One entry per factory, default options, registered under the factory's scheme.
    pub fn for_factories(factories: &[&dyn ConnectorFactory]) -> Self {
        let connectors = factories
            .iter()
            .map(|f| ConnectorEntry {
                factory: f.name().to_string(),
                scheme: Some(f.default_scheme().to_string()),
                routes: Vec::new(),
                default: factories.len() == 1,
                options: empty_options(),
            })
            .collect();
        Self { connectors }
    }
}

impl ConnectorRegistry {
    pub fn from_config(
        config: &RegistryConfig,
        factories: &[&dyn ConnectorFactory],
    ) -> Result<Self> {
        let mut registry = ConnectorRegistry::new();
        for entry in &config.connectors {
            let factory = factories
                .iter()
                .find(|f| f.name() == entry.factory)
                .with_context(|| format!("unknown connector factory {:?}", entry.factory))?;
            let connector = factory
                .create(entry.options.clone())
                .with_context(|| format!("create connector {:?}", entry.factory))?;

            let scheme = entry
                .scheme
                .as_deref()
                .unwrap_or_else(|| factory.default_scheme());
            registry.register(scheme, connector.clone())?;
            for pattern in &entry.routes {
                registry.route(pattern, connector.clone())?;
            }
            if entry.default {
                registry.set_default(connector);
            }
        }
        Ok(registry)
    }
}
