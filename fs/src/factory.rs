use std::sync::Arc;

use anyhow::{Context, Result};
use knotx_repository_connector::config::options_from_value;
use knotx_repository_connector::{ConnectorFactory, RepositoryConnector};

use crate::connector::FilesystemRepositoryConnector;
use crate::options::FilesystemRepositoryOptions;

/// Registry factory for [`FilesystemRepositoryConnector`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemRepositoryConnectorFactory;

impl ConnectorFactory for FilesystemRepositoryConnectorFactory {
    fn name(&self) -> &str {
        "fsRepoConnectorHandler"
    }

    fn default_scheme(&self) -> &str {
        "fs"
    }

    fn create(&self, options: toml::Value) -> Result<Arc<dyn RepositoryConnector>> {
        let options: FilesystemRepositoryOptions =
            options_from_value(options).context("invalid filesystem repository options")?;
        Ok(Arc::new(FilesystemRepositoryConnector::new(options)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_with_catalogue() {
        let options: toml::Value = toml::from_str(r#"catalogue = "/tmp""#).unwrap();
        let connector = FilesystemRepositoryConnectorFactory.create(options).unwrap();
        assert_eq!(connector.name(), "fs-repository");
    }

    #[test]
    fn rejects_wrong_option_type() {
        let options: toml::Value = toml::from_str("catalogue = 5").unwrap();
        let Err(err) = FilesystemRepositoryConnectorFactory.create(options) else {
            panic!("expected a numeric catalogue to be rejected");
        };
        assert!(format!("{err:#}").contains("invalid filesystem repository options"));
    }
}
