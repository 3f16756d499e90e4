//! CLI command handlers.

mod config;
mod scrape;

pub use config::run_config;
pub use scrape::run_scrape;
