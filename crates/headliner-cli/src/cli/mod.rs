//! CLI for headliner.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use headliner_core::config::{self, ScrapeConfig};
use std::path::PathBuf;

use commands::{run_config, run_scrape};

/// Top-level CLI for headliner.
#[derive(Debug, Parser)]
#[command(name = "headliner")]
#[command(about = "headliner: save a web page's headings to a text file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a page and write its h1/h2/h3 text, one per line.
    Scrape {
        /// Page URL; defaults to the `url` in config.toml.
        url: Option<String>,

        /// Output file (default: headlines.txt).
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Request timeout in seconds (default 10).
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },

    /// Show the config file location and effective settings.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Scrape {
                url,
                output,
                timeout,
            } => {
                let cfg = config_or_default(config::load_or_init());
                let cfg = cfg.with_overrides(url, output, timeout);
                run_scrape(&cfg);
            }
            CliCommand::Config => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_config(&cfg)?;
            }
        }

        Ok(())
    }
}

/// A broken config file must not stop a scrape; built-in defaults apply instead.
fn config_or_default(loaded: Result<ScrapeConfig>) -> ScrapeConfig {
    match loaded {
        Ok(cfg) => {
            tracing::debug!("loaded config: {:?}", cfg);
            cfg
        }
        Err(err) => {
            tracing::warn!("config unavailable, using defaults: {:#}", err);
            ScrapeConfig::default()
        }
    }
}

#[cfg(test)]
mod tests;
