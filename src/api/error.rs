//! Error types for the HTTP boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::warn;

use crate::evaluation::EvaluationError;
use crate::fetch::FetchError;

/// URL schemes accepted by `GET /evaluation`.
pub const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// Prefix of every `400 Bad Request` body produced by this service.
pub const BAD_DATA_PREFIX: &str = "BadDataException";

/// Errors for a supplied `url` query value that cannot be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlValidationError {
    /// Value is not an absolute URL.
    #[error("cannot parse url")]
    Malformed {
        /// The value as supplied.
        url: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },

    /// URL uses a scheme other than those in [`ALLOWED_SCHEMES`].
    #[error("only http, https urls are allowed")]
    UnsupportedScheme {
        /// The value as supplied.
        url: String,
        /// The rejected scheme (lowercased).
        scheme: String,
    },
}

impl UrlValidationError {
    /// Creates a malformed URL error.
    pub fn malformed(url: impl Into<String>, source: url::ParseError) -> Self {
        Self::Malformed {
            url: url.into(),
            source,
        }
    }

    /// Creates an unsupported scheme error.
    pub fn unsupported_scheme(url: impl Into<String>, scheme: impl Into<String>) -> Self {
        Self::UnsupportedScheme {
            url: url.into(),
            scheme: scheme.into(),
        }
    }
}

/// Any failure that ends an evaluation request.
///
/// Wraps the module errors transparently so their messages reach the client
/// unchanged.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A supplied URL was rejected before any download.
    #[error(transparent)]
    InvalidUrl(#[from] UrlValidationError),

    /// A resource could not be retrieved or parsed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Records were well-formed but semantically invalid.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self, detail = ?self, "rejecting evaluation request");
        (StatusCode::BAD_REQUEST, format!("{BAD_DATA_PREFIX}: {self}")).into_response()
    }
}
