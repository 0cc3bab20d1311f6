//! Error types for the fetch module.
//!
//! Every retrieval failure renders as `cannot retrieve resource` and every
//! content failure renders as `cannot parse resource`. The variants keep the
//! URL and underlying cause so logs stay useful while the user-facing message
//! stays stable.

use thiserror::Error;

/// User-facing message for any failure to open or read a resource.
pub const RETRIEVE_FAILURE_MESSAGE: &str = "cannot retrieve resource";

/// User-facing message for any failure to decode a resource as speech CSV.
pub const PARSE_FAILURE_MESSAGE: &str = "cannot parse resource";

/// Errors that can occur while fetching and parsing a speech CSV resource.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("cannot retrieve resource")]
    Unreachable {
        /// The URL that failed to download.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("cannot retrieve resource")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// Server answered with a non-success status.
    #[error("cannot retrieve resource")]
    HttpStatus {
        /// The URL that returned an error status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// Response body exceeded the configured size limit.
    #[error("cannot retrieve resource")]
    TooLarge {
        /// The URL whose body was too large.
        url: String,
        /// The configured maximum body size in bytes.
        limit: usize,
    },

    /// The download task died before producing a result.
    #[error("cannot retrieve resource")]
    Aborted {
        /// The URL the task was fetching.
        url: String,
        /// Panic or cancellation description.
        reason: String,
    },

    /// Body was retrieved but is not valid speech CSV.
    #[error("cannot parse resource")]
    Malformed {
        /// The URL of the offending resource (empty for in-memory input).
        url: String,
        /// Why parsing failed.
        reason: String,
    },
}

impl FetchError {
    /// Creates a network error from a reqwest error.
    pub fn unreachable(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Unreachable {
            url: url.into(),
            source,
        }
    }

    /// Creates a timeout error.
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates a body-too-large error.
    pub fn too_large(url: impl Into<String>, limit: usize) -> Self {
        Self::TooLarge {
            url: url.into(),
            limit,
        }
    }

    /// Creates an aborted-task error.
    pub fn aborted(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Aborted {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Creates a parse error.
    pub fn malformed(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Returns true when the resource was retrieved but its content was rejected.
    #[must_use]
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    /// Returns the URL this error relates to.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Unreachable { url, .. }
            | Self::Timeout { url }
            | Self::HttpStatus { url, .. }
            | Self::TooLarge { url, .. }
            | Self::Aborted { url, .. }
            | Self::Malformed { url, .. } => url,
        }
    }

    /// Attaches a URL to an error produced without one (e.g. by [`parse_records`](super::parse_records)).
    #[must_use]
    pub fn with_url(self, url: impl Into<String>) -> Self {
        match self {
            Self::Malformed { reason, .. } => Self::Malformed {
                url: url.into(),
                reason,
            },
            other => other,
        }
    }
}
