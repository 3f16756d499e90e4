//! CLI parse tests.

use super::{config_or_default, Cli, CliCommand};
use headliner_core::config::ScrapeConfig;
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_scrape_defaults() {
    match parse(&["headliner", "scrape"]) {
        CliCommand::Scrape {
            url,
            output,
            timeout,
        } => {
            assert!(url.is_none());
            assert!(output.is_none());
            assert!(timeout.is_none());
        }
        _ => panic!("expected Scrape"),
    }
}

#[test]
fn cli_parse_scrape_url() {
    match parse(&["headliner", "scrape", "https://example.com/news"]) {
        CliCommand::Scrape { url, .. } => {
            assert_eq!(url.as_deref(), Some("https://example.com/news"))
        }
        _ => panic!("expected Scrape"),
    }
}

#[test]
fn cli_parse_scrape_output_and_timeout() {
    match parse(&[
        "headliner",
        "scrape",
        "https://example.com/",
        "-o",
        "/tmp/out.txt",
        "--timeout",
        "3",
    ]) {
        CliCommand::Scrape {
            output, timeout, ..
        } => {
            assert_eq!(output, Some(PathBuf::from("/tmp/out.txt")));
            assert_eq!(timeout, Some(3));
        }
        _ => panic!("expected Scrape"),
    }
}

#[test]
fn cli_parse_scrape_long_output() {
    match parse(&["headliner", "scrape", "--output", "news.txt"]) {
        CliCommand::Scrape { url, output, .. } => {
            assert!(url.is_none());
            assert_eq!(output, Some(PathBuf::from("news.txt")));
        }
        _ => panic!("expected Scrape"),
    }
}

#[test]
fn cli_parse_config() {
    match parse(&["headliner", "config"]) {
        CliCommand::Config => {}
        _ => panic!("expected Config"),
    }
}

#[test]
fn cli_rejects_non_numeric_timeout() {
    assert!(Cli::try_parse_from(["headliner", "scrape", "--timeout", "soon"]).is_err());
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["headliner"]).is_err());
}

#[test]
fn unreadable_config_falls_back_to_defaults() {
    let cfg = config_or_default(Err(anyhow::anyhow!("Not a directory (os error 20)")));
    assert_eq!(cfg, ScrapeConfig::default());
}

#[test]
fn loaded_config_is_kept() {
    let loaded = ScrapeConfig {
        url: "https://example.com/".to_string(),
        ..ScrapeConfig::default()
    };
    assert_eq!(config_or_default(Ok(loaded.clone())), loaded);
}
