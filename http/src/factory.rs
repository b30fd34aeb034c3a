use std::sync::Arc;

use anyhow::{Context, Result};
use knotx_repository_connector::config::options_from_value;
use knotx_repository_connector::{ConnectorFactory, RepositoryConnector};

use crate::connector::HttpRepositoryConnector;
use crate::options::HttpRepositoryOptions;

/// Registry factory for [`HttpRepositoryConnector`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpRepositoryConnectorFactory;

impl ConnectorFactory for HttpRepositoryConnectorFactory {
    fn name(&self) -> &str {
        "httpRepoConnectorHandler"
    }

    fn default_scheme(&self) -> &str {
        "http"
    }

    fn create(&self, options: toml::Value) -> Result<Arc<dyn RepositoryConnector>> {
        let options: HttpRepositoryOptions =
            options_from_value(options).context("invalid HTTP repository options")?;
        Ok(Arc::new(HttpRepositoryConnector::new(options)?))
    }
}
