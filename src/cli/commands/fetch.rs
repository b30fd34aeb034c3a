//! `fetch <location>`: resolve through the registry and emit the body.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

use crate::config::{self, REGISTRY_CONFIG_FILE};
use crate::connector::{ConnectorFactory, RepositoryConnector};
use crate::fetch::FetchResult;
use crate::location::Location;
use crate::registry::{ConnectorRegistry, RegistryConfig};

#[derive(Debug, Clone, Default)]
pub struct FetchArgs {
    pub location: String,
    pub config: Option<PathBuf>,
    pub headers: Vec<String>,
    pub include: bool,
    pub output: Option<PathBuf>,
}

/// Registry from `config` (or the XDG default file); an empty config registers
/// every factory with default options.
pub fn build_registry(
    config: Option<&std::path::Path>,
    factories: &[&dyn ConnectorFactory],
) -> Result<ConnectorRegistry> {
    let mut cfg: RegistryConfig = match config {
        Some(path) => config::load_from_path(path)?,
        None => config::load_or_init(REGISTRY_CONFIG_FILE)?,
    };
    if cfg.connectors.is_empty() {
        cfg = RegistryConfig::for_factories(factories);
    }
    tracing::debug!("registry config: {:?}", cfg);
    ConnectorRegistry::from_config(&cfg, factories)
}

/// Parses `location` and attaches `NAME:VALUE` headers.
pub fn parse_location(location: &str, headers: &[String]) -> Result<Location> {
    let mut loc = Location::parse(location)?;
    for header in headers {
        let (name, value) = header
            .split_once(':')
            .with_context(|| format!("header {header:?} is not NAME:VALUE"))?;
        loc = loc.with_header(name, value)?;
    }
    Ok(loc)
}

pub async fn run_fetch(args: &FetchArgs, factories: &[&dyn ConnectorFactory]) -> Result<()> {
    let registry = build_registry(args.config.as_deref(), factories)?;
    let location = parse_location(&args.location, &args.headers)?;

    let result = registry.fetch(&location).await?;
    if args.include {
        eprint!("{}", render_head(&result));
    }

    match &args.output {
        Some(path) => tokio::fs::write(path, &result.body)
            .await
            .with_context(|| format!("write {}", path.display()))?,
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(&result.body).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}

/// Status line and headers, one per line, followed by a blank line.
fn render_head(result: &FetchResult) -> String {
    let mut head = format!("{}\n", result.status);
    for (name, value) in &result.headers {
        head.push_str(&format!(
            "{}: {}\n",
            name,
            value.to_str().unwrap_or("<binary>")
        ));
    }
    head.push('\n');
    head
}
