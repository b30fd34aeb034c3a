//! Filesystem repository connector.
//!
//! Serves templates from a local directory (the catalogue). The location path
//! is resolved relative to the catalogue; responses carry a content type
//! guessed from the file extension plus `Last-Modified` and `ETag`.

mod connector;
mod factory;
mod metadata;
mod options;

pub use connector::FilesystemRepositoryConnector;
pub use factory::FilesystemRepositoryConnectorFactory;
pub use options::FilesystemRepositoryOptions;
