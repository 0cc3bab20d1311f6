//! Fan-out downloader for fetching many CSV resources at once.
//!
//! [`FanOutDownloader`] spawns one Tokio task per URL, bounded by a shared
//! semaphore, waits for every task to finish, and then either concatenates
//! the results in input order or surfaces a single underlying [`FetchError`].
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use speech_evaluator_core::download::FanOutDownloader;
//! use speech_evaluator_core::fetch::{HttpFetcher, RecordSource};
//! use url::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source: Arc<dyn RecordSource> = Arc::new(HttpFetcher::new()?);
//! let downloader = FanOutDownloader::new(10)?;
//! let urls = vec![
//!     Url::parse("https://example.com/2012.csv")?,
//!     Url::parse("https://example.com/2013.csv")?,
//! ];
//! let records = downloader.download_all(&source, &urls).await?;
//! println!("Fetched {} records", records.len());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::fetch::{FetchError, RecordSource};
use crate::record::SpeechRecord;

/// Minimum allowed concurrency value.
const MIN_CONCURRENCY: usize = 1;

/// Maximum allowed concurrency value.
const MAX_CONCURRENCY: usize = 100;

/// Default concurrency if not specified.
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Error type for downloader construction.
#[derive(Debug, thiserror::Error)]
pub enum DownloaderError {
    /// Invalid concurrency value provided.
    #[error(
        "invalid concurrency value {value}: must be between {MIN_CONCURRENCY} and {MAX_CONCURRENCY}"
    )]
    InvalidConcurrency {
        /// The invalid value that was provided.
        value: usize,
    },
}

/// Concurrent all-or-nothing downloader.
///
/// # Concurrency Model
///
/// - Each URL is fetched in its own Tokio task
/// - A semaphore permit is acquired inside the task before fetching, so the
///   pool bound is shared by every request using this downloader
/// - Permits are released automatically when a fetch completes (RAII)
/// - The caller awaits every join handle before looking at any result
///
/// # Ordering
///
/// Join handles are kept in input order, so the combined record list follows
/// the order URLs were supplied regardless of which fetch finishes first.
#[derive(Debug)]
pub struct FanOutDownloader {
    /// Semaphore for concurrency control.
    semaphore: Arc<Semaphore>,
    /// Configured concurrency limit.
    concurrency: usize,
}

impl FanOutDownloader {
    /// Creates a downloader with the specified concurrency limit.
    ///
    /// # Errors
    ///
    /// Returns [`DownloaderError::InvalidConcurrency`] if the value is outside
    /// the valid range (1-100).
    ///
    /// # Example
    ///
    /// ```
    /// use speech_evaluator_core::download::FanOutDownloader;
    ///
    /// let downloader = FanOutDownloader::new(10).unwrap();
    /// assert_eq!(downloader.concurrency(), 10);
    /// ```
    #[instrument(level = "debug")]
    pub fn new(concurrency: usize) -> Result<Self, DownloaderError> {
        if !(MIN_CONCURRENCY..=MAX_CONCURRENCY).contains(&concurrency) {
            return Err(DownloaderError::InvalidConcurrency { value: concurrency });
        }

        debug!(concurrency, "creating fan-out downloader");

        Ok(Self {
            semaphore: Arc::new(Semaphore::new(concurrency)),
            concurrency,
        })
    }

    /// Returns the configured concurrency limit.
    #[must_use]
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Fetches every URL concurrently and concatenates the records.
    ///
    /// An empty `urls` slice returns an empty list without spawning anything.
    /// Otherwise every task runs to completion before a result is produced;
    /// no partial result is ever returned.
    ///
    /// # Errors
    ///
    /// Returns the first failing URL's [`FetchError`] (in input order),
    /// unchanged. A task that panics or is cancelled is reported as
    /// [`FetchError::Aborted`] for its URL.
    #[instrument(skip(self, source, urls), fields(url_count = urls.len()))]
    pub async fn download_all(
        &self,
        source: &Arc<dyn RecordSource>,
        urls: &[Url],
    ) -> Result<Vec<SpeechRecord>, FetchError> {
        if urls.is_empty() {
            debug!("no urls supplied, skipping fan-out");
            return Ok(Vec::new());
        }

        let started = Instant::now();
        let mut handles = Vec::with_capacity(urls.len());

        for url in urls {
            let semaphore = Arc::clone(&self.semaphore);
            let source = Arc::clone(source);
            let url = url.clone();

            handles.push(tokio::spawn(async move {
                // Permit is dropped when this block exits (RAII)
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|_| FetchError::aborted(url.as_str(), "worker pool closed"))?;

                let task_started = Instant::now();
                let outcome = source.fetch(&url).await;
                match &outcome {
                    Ok(records) => debug!(
                        url = %url,
                        records = records.len(),
                        elapsed_ms = task_started.elapsed().as_millis(),
                        "fetch completed"
                    ),
                    Err(e) => warn!(url = %url, error = %e, kind = ?e, "fetch failed"),
                }
                outcome
            }));
        }

        debug!(task_count = handles.len(), "waiting for fetches to complete");

        // Join every task before inspecting any outcome
        let mut outcomes = Vec::with_capacity(handles.len());
        for (url, handle) in urls.iter().zip(handles) {
            let outcome = handle.await.unwrap_or_else(|join_error| {
                warn!(url = %url, error = %join_error, "fetch task did not complete");
                Err(FetchError::aborted(url.as_str(), join_error.to_string()))
            });
            outcomes.push(outcome);
        }

        let failed = outcomes.iter().filter(|o| o.is_err()).count();
        if failed > 0 {
            info!(
                failed,
                total = outcomes.len(),
                elapsed_ms = started.elapsed().as_millis(),
                "fan-out failed"
            );
        }

        let mut records = Vec::new();
        for outcome in outcomes {
            records.extend(outcome?);
        }

        info!(
            urls = urls.len(),
            records = records.len(),
            elapsed_ms = started.elapsed().as_millis(),
            "fan-out complete"
        );

        Ok(records)
    }
}
