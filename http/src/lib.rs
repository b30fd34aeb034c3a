//! HTTP repository connector.
//!
//! Fetches templates from a remote HTTP repository with libcurl. The request
//! path and query come from the [`Location`]; scheme, host and port come from
//! the configured [`ClientDestination`]. Only request headers matching the
//! allowed patterns are forwarded.
//!
//! [`Location`]: knotx_repository_connector::Location

mod attempt;
mod connector;
mod factory;
mod options;
mod request;
mod response;
mod transfer;

pub use connector::HttpRepositoryConnector;
pub use factory::HttpRepositoryConnectorFactory;
pub use options::{ClientDestination, ClientOptions, CustomHttpHeader, HttpRepositoryOptions};
