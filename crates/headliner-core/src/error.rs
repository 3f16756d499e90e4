//! Error type shared by the fetch, extract and write stages.

use std::path::PathBuf;

/// Broad category of a [`ScrapeError`], used to pick the console message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad URL, transport failure, timeout or non-2xx status.
    Network,
    /// The heading selector could not be built.
    Parse,
    /// Output file could not be written.
    Io,
}

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("cannot build heading selector: {0}")]
    Parse(String),

    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScrapeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScrapeError::InvalidUrl { .. }
            | ScrapeError::Request { .. }
            | ScrapeError::Status { .. } => ErrorKind::Network,
            ScrapeError::Parse(_) => ErrorKind::Parse,
            ScrapeError::Io { .. } => ErrorKind::Io,
        }
    }

    /// True when the request gave up because the configured timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ScrapeError::Request { source, .. } if source.is_timeout())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScrapeError::Io {
            path: path.into(),
            source,
        }
    }
}
