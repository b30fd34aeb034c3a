//! Repository connector contract and shared tooling.
//!
//! A connector fetches template bytes for a [`Location`] from one kind of
//! origin. The HTTP and filesystem implementations live in the
//! `knotx-repository-connector-http` and `knotx-repository-connector-fs`
//! crates; this crate holds the contract, the [`ConnectorRegistry`] that
//! dispatches between them, and the config/logging/retry/CLI plumbing both
//! binaries share.

pub mod cli;
pub mod config;
pub mod connector;
pub mod error;
pub mod fetch;
pub mod location;
pub mod logging;
pub mod pattern;
pub mod registry;
pub mod retry;

pub use connector::{ConnectorFactory, RepositoryConnector};
pub use error::{FetchError, FetchErrorKind};
pub use fetch::FetchResult;
pub use location::Location;
pub use registry::{ConnectorRegistry, RegistryConfig};
