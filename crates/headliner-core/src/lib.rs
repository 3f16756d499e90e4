pub mod config;
pub mod logging;

pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod pipeline;
pub mod writer;

pub use error::{ErrorKind, ScrapeError};
pub use pipeline::ScrapeOutcome;
