//! `factories` and `config-path`.

use anyhow::Result;

use crate::config::{config_path, REGISTRY_CONFIG_FILE};
use crate::connector::ConnectorFactory;

pub fn run_factories(factories: &[&dyn ConnectorFactory]) {
    println!("{:<28} {}", "FACTORY", "DEFAULT SCHEME");
    for f in factories {
        println!("{:<28} {}", f.name(), f.default_scheme());
    }
}

pub fn run_config_path() -> Result<()> {
    println!("{}", config_path(REGISTRY_CONFIG_FILE)?.display());
    Ok(())
}
