//! `headliner scrape [url]` – fetch a page and save its headings.

use headliner_core::config::ScrapeConfig;
use headliner_core::pipeline;
use std::io;

/// Run the scrape, printing progress and any failure to stdout.
pub fn run_scrape(cfg: &ScrapeConfig) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    pipeline::scrape(cfg, &mut out);
}
