use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Page scraped when neither the CLI nor the config file names one.
pub const DEFAULT_URL: &str = "https://www.bbc.com/news";

pub const DEFAULT_OUTPUT: &str = "headlines.txt";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Tags treated as headlines. A heuristic: many sites mark up titles differently.
pub const HEADING_TAGS: &[&str] = &["h1", "h2", "h3"];

/// Scrape settings loaded from `~/.config/headliner/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Page to fetch.
    pub url: String,
    /// Destination text file; relative paths resolve against the working directory.
    pub output_path: PathBuf,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Optional `User-Agent` override; a built-in value is sent otherwise.
    pub user_agent: Option<String>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ScrapeConfig {
    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        url: Option<String>,
        output_path: Option<PathBuf>,
        timeout_secs: Option<u64>,
    ) -> Self {
        if let Some(url) = url {
            self.url = url;
        }
        if let Some(path) = output_path {
            self.output_path = path;
        }
        if let Some(secs) = timeout_secs {
            self.timeout_secs = secs;
        }
        self
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs =
        xdg::BaseDirectories::with_prefix("headliner").context("locate config directory")?;
    xdg_dirs
        .place_config_file("config.toml")
        .context("locate config directory")
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ScrapeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ScrapeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ScrapeConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
