//! Fetch → extract → write, with progress and error lines for the console.
//!
//! `run` propagates errors; `scrape` reports them on `out` and always returns
//! normally, which is what the CLI uses.

use std::fmt::Display;
use std::io::Write;
use std::path::PathBuf;

use crate::config::ScrapeConfig;
use crate::error::{ErrorKind, ScrapeError};
use crate::extractor;
use crate::fetcher::Fetcher;
use crate::writer;

/// What a completed scrape produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    /// `count` headings were written to `path` (absolute).
    Saved { count: usize, path: PathBuf },
    /// The page had no qualifying headings; no file was written.
    NoHeadlines,
}

fn emit(out: &mut dyn Write, line: impl Display) {
    // Console output is best effort; a closed stdout must not abort the scrape.
    let _ = writeln!(out, "{line}");
}

/// Run the scrape described by `config`, printing progress to `out`.
pub fn run(config: &ScrapeConfig, out: &mut dyn Write) -> Result<ScrapeOutcome, ScrapeError> {
    emit(out, format_args!("Fetching content from {}...", config.url));
    let fetcher = Fetcher::new(config)?;
    let html = fetcher.fetch_html(&config.url)?;

    emit(out, "Parsing HTML content...");
    let headlines = extractor::extract_headings(&html)?;

    if headlines.is_empty() {
        tracing::info!(url = %config.url, "no headlines found");
        emit(out, "No headlines found. The selector might be incorrect.");
        return Ok(ScrapeOutcome::NoHeadlines);
    }

    let path = writer::write_headlines(&config.output_path, &headlines)?;
    let count = headlines.len();
    tracing::info!(url = %config.url, count, path = %path.display(), "saved headlines");

    emit(out, format_args!("\nSuccessfully scraped {count} headlines."));
    emit(out, format_args!("Headlines saved to {}", path.display()));
    Ok(ScrapeOutcome::Saved { count, path })
}

/// Print the console line for a failed scrape.
pub fn report_error(err: &ScrapeError, out: &mut dyn Write) {
    tracing::warn!(kind = ?err.kind(), timeout = err.is_timeout(), "scrape failed: {err}");
    match err.kind() {
        ErrorKind::Network => emit(out, format_args!("Error fetching the URL: {err}")),
        ErrorKind::Parse | ErrorKind::Io => emit(out, format_args!("An error occurred: {err}")),
    }
}

/// Run the scrape and report any failure on `out` instead of returning it.
pub fn scrape(config: &ScrapeConfig, out: &mut dyn Write) -> Option<ScrapeOutcome> {
    match run(config, out) {
        Ok(outcome) => Some(outcome),
        Err(err) => {
            report_error(&err, out);
            None
        }
    }
}
