//! Retrieval and decoding of speech CSV resources.
//!
//! # Features
//!
//! - [`RecordSource`] - async seam the downloader fans out over
//! - [`HttpFetcher`] - `reqwest` implementation with timeouts and a body cap
//! - [`parse_records`] - strict CSV decoding into [`SpeechRecord`](crate::record::SpeechRecord)
//! - [`FetchError`] - two user-visible failure kinds (retrieve / parse)

mod client;
pub mod constants;
mod error;
mod parse;

pub use client::HttpFetcher;
pub use error::{FetchError, PARSE_FAILURE_MESSAGE, RETRIEVE_FAILURE_MESSAGE};
pub use parse::parse_records;

use async_trait::async_trait;
use url::Url;

use crate::record::SpeechRecord;

/// A place speech records can be fetched from, one URL at a time.
///
/// Implementations must be `Send + Sync` so a single instance can be shared
/// across concurrently spawned download tasks.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetches and parses every record behind `url`.
    ///
    /// # Errors
    ///
    /// Returns a retrieval-kind [`FetchError`] if the resource cannot be read
    /// and [`FetchError::Malformed`] if its content is not valid speech CSV.
    async fn fetch(&self, url: &Url) -> Result<Vec<SpeechRecord>, FetchError>;
}
