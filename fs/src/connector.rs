use async_trait::async_trait;
use knotx_repository_connector::{FetchError, FetchResult, Location, RepositoryConnector};
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::metadata::response_headers;
use crate::options::FilesystemRepositoryOptions;

/// Connector reading templates from a local catalogue directory.
#[derive(Debug, Clone)]
pub struct FilesystemRepositoryConnector {
    catalogue: PathBuf,
}

impl FilesystemRepositoryConnector {
    pub fn new(options: FilesystemRepositoryOptions) -> Self {
        Self {
            catalogue: options.catalogue,
        }
    }

    /// Local file for a location path, or `None` if it would leave the catalogue.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let inside = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        inside.then(|| self.catalogue.join(relative))
    }
}

fn map_io_error(path: &str, err: io::Error) -> FetchError {
    match err.kind() {
        io::ErrorKind::NotFound => FetchError::NotFound {
            location: path.to_string(),
        },
        io::ErrorKind::PermissionDenied => FetchError::PermissionDenied {
            location: path.to_string(),
        },
        _ => FetchError::transport(path, err),
    }
}

#[async_trait]
impl RepositoryConnector for FilesystemRepositoryConnector {
    fn name(&self) -> &str {
        "fs-repository"
    }

    async fn fetch(&self, location: &Location) -> Result<FetchResult, FetchError> {
        let path = location.path();
        let Some(local) = self.resolve(path) else {
            tracing::error!(
                "Unable to get template {} from the repository: path escapes catalogue",
                path
            );
            return Err(FetchError::PermissionDenied {
                location: path.to_string(),
            });
        };
        tracing::debug!("Fetching template `{}` from {}", path, local.display());

        let body = match tokio::fs::read(&local).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Unable to get template {} from the repository: {}", path, e);
                return Err(map_io_error(path, e));
            }
        };
        let modified = tokio::fs::metadata(&local)
            .await
            .ok()
            .and_then(|m| m.modified().ok());
        let headers = response_headers(&local, &body, modified);
        Ok(FetchResult::ok(body).with_headers(headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connector(catalogue: &str) -> FilesystemRepositoryConnector {
        FilesystemRepositoryConnector::new(FilesystemRepositoryOptions {
            catalogue: PathBuf::from(catalogue),
        })
    }

    #[test]
    fn resolve_strips_leading_slash() {
        let c = connector("/srv/templates");
        assert_eq!(
            c.resolve("/a/b.html"),
            Some(PathBuf::from("/srv/templates/a/b.html"))
        );
        assert_eq!(c.resolve("./c.html"), Some(PathBuf::from("/srv/templates/./c.html")));
    }

    #[test]
    fn resolve_with_empty_catalogue_is_relative() {
        assert_eq!(connector("").resolve("/x.html"), Some(PathBuf::from("x.html")));
    }

    #[test]
    fn resolve_refuses_parent_components() {
        let c = connector("/srv/templates");
        assert_eq!(c.resolve("/../etc/passwd"), None);
        assert_eq!(c.resolve("/a/../../b"), None);
        assert_eq!(c.resolve("//etc/passwd"), Some(PathBuf::from("/srv/templates/etc/passwd")));
    }

    #[test]
    fn io_errors_map_to_kinds() {
        use knotx_repository_connector::FetchErrorKind;
        let e = map_io_error("/a", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(e.kind(), FetchErrorKind::NotFound);
        let e = map_io_error("/a", io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(e.kind(), FetchErrorKind::PermissionDenied);
        let e = map_io_error("/a", io::Error::other("disk on fire"));
        assert_eq!(e.kind(), FetchErrorKind::TransportFailure);
        assert!(e.to_string().contains("disk on fire"));
    }
}
