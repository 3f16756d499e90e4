//! `headliner config` – show where settings live and what they resolve to.

use anyhow::Result;
use headliner_core::config::{self, ScrapeConfig};

pub fn run_config(cfg: &ScrapeConfig) -> Result<()> {
    let path = config::config_path()?;
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
