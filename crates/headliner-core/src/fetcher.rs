//! Single blocking HTTP GET for the page to scrape.
//!
//! No retries: any transport failure, timeout or non-2xx status is returned
//! to the caller as a network-kind [`ScrapeError`].

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;

const MAX_REDIRECTS: usize = 10;

/// Parse and re-serialize a URL so spaces, unicode and similar are percent-encoded.
pub fn normalize_url(input: &str) -> Result<String, ScrapeError> {
    let trimmed = input.trim();
    let url = Url::parse(trimmed).map_err(|source| ScrapeError::InvalidUrl {
        url: trimmed.to_string(),
        source,
    })?;
    Ok(url.to_string())
}

pub fn default_user_agent() -> String {
    format!(
        "headliner/{} (+rust; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    )
}

/// Blocking HTTP client configured with the scrape timeout and user agent.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &ScrapeConfig) -> Result<Self, ScrapeError> {
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(default_user_agent);
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|source| ScrapeError::Request {
                url: config.url.clone(),
                source,
            })?;
        Ok(Self { client })
    }

    /// GET `url` and return the decoded body text on a 2xx response.
    pub fn fetch_html(&self, url: &str) -> Result<String, ScrapeError> {
        let url = normalize_url(url)?;
        tracing::debug!(%url, "sending GET");

        let request_err = |source: reqwest::Error| ScrapeError::Request {
            url: url.clone(),
            source,
        };

        let resp = self.client.get(&url).send().map_err(request_err)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.clone(),
                status,
            });
        }

        let body = resp.text().map_err(request_err)?;
        tracing::debug!(%url, bytes = body.len(), "fetched page");
        Ok(body)
    }
}
