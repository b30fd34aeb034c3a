//! Command-line front end shared by the connector binaries.
//!
//! Each binary passes the connector factories it was built with; the registry
//! is assembled from `connectors.toml` (or `--config`) using those factories.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::connector::ConnectorFactory;
use commands::{run_config_path, run_factories, run_fetch, FetchArgs};

#[derive(Debug, Parser)]
#[command(about = "Fetch templates through Knot.x repository connectors", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a template and write its body to stdout.
    Fetch {
        /// Location to fetch, e.g. `fs:/index.html` or `/content/page.html?lang=en`.
        location: String,

        /// Registry config file (TOML or JSON) instead of the XDG default.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Request header forwarded to the origin; may be repeated.
        #[arg(short = 'H', long = "header", value_name = "NAME:VALUE")]
        headers: Vec<String>,

        /// Print status line and response headers to stderr before the body.
        #[arg(short, long)]
        include: bool,

        /// Write the body to this file instead of stdout.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// List the connector factories available in this binary.
    Factories,

    /// Print the path of the registry config file.
    ConfigPath,
}

impl CliCommand {
    pub async fn run_from_args(factories: &[&dyn ConnectorFactory]) -> Result<()> {
        let cli = Cli::parse();
        cli.command.run(factories).await
    }

    pub async fn run(self, factories: &[&dyn ConnectorFactory]) -> Result<()> {
        match self {
            CliCommand::Fetch {
                location,
                config,
                headers,
                include,
                output,
            } => {
                let args = FetchArgs {
                    location,
                    config,
                    headers,
                    include,
                    output,
                };
                run_fetch(&args, factories).await?
            }
            CliCommand::Factories => run_factories(factories),
            CliCommand::ConfigPath => run_config_path()?,
        }
        Ok(())
    }
}
