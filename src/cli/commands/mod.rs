//! CLI command handlers.

mod fetch;
mod info;

pub use fetch::{run_fetch, FetchArgs};
pub use info::{run_config_path, run_factories};
