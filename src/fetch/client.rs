//! HTTP-backed record source.
//!
//! [`HttpFetcher`] downloads a CSV resource with `reqwest`, enforces a body
//! size cap while streaming, then hands the bytes to [`parse_records`].

use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use super::constants::{CONNECT_TIMEOUT_SECS, MAX_BODY_BYTES, REQUEST_TIMEOUT_SECS};
use super::error::FetchError;
use super::{RecordSource, parse_records};
use crate::record::SpeechRecord;
use crate::user_agent;

/// HTTP client for fetching speech CSV resources.
///
/// Create once and share; the inner `reqwest::Client` pools connections and
/// is cheap to clone.
///
/// # Example
///
/// ```no_run
/// use speech_evaluator_core::fetch::{HttpFetcher, RecordSource};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = HttpFetcher::new()?;
/// let url = Url::parse("https://example.com/speeches.csv")?;
/// let records = fetcher.fetch(&url).await?;
/// println!("Fetched {} records", records.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    max_body_bytes: usize,
}

impl HttpFetcher {
    /// Creates a fetcher with default timeouts and body limit.
    ///
    /// Default configuration:
    /// - Connect timeout: 10 seconds
    /// - Request timeout: 30 seconds
    /// - Max body: 16 MiB
    ///
    /// # Errors
    ///
    /// Returns the underlying `reqwest::Error` if the client cannot be built.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_settings(CONNECT_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS, MAX_BODY_BYTES)
    }

    /// Creates a fetcher with explicit timeouts and body limit.
    ///
    /// # Errors
    ///
    /// Returns the underlying `reqwest::Error` if the client cannot be built.
    #[instrument(level = "debug")]
    pub fn with_settings(
        connect_timeout_secs: u64,
        request_timeout_secs: u64,
        max_body_bytes: usize,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(user_agent::default_fetch_user_agent())
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .timeout(Duration::from_secs(request_timeout_secs))
            .gzip(true)
            .build()?;
        Ok(Self {
            client,
            max_body_bytes,
        })
    }

    /// Returns the configured maximum body size in bytes.
    #[must_use]
    pub fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }

    async fn read_body(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| map_request_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http_status(url, status.as_u16()));
        }

        if response
            .content_length()
            .is_some_and(|len| len > self.max_body_bytes as u64)
        {
            return Err(FetchError::too_large(url, self.max_body_bytes));
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| map_request_error(url, e))?;
            if body.len() + chunk.len() > self.max_body_bytes {
                return Err(FetchError::too_large(url, self.max_body_bytes));
            }
            body.extend_from_slice(&chunk);
        }

        Ok(body)
    }
}

#[async_trait]
impl RecordSource for HttpFetcher {
    #[instrument(skip(self), fields(url = %url))]
    async fn fetch(&self, url: &Url) -> Result<Vec<SpeechRecord>, FetchError> {
        debug!("fetching resource");
        let body = self.read_body(url.as_str()).await?;
        debug!(bytes = body.len(), "resource retrieved");
        parse_records(&body).map_err(|e| e.with_url(url.as_str()))
    }
}

fn map_request_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::timeout(url)
    } else {
        FetchError::unreachable(url, error)
    }
}
