//! HTTP boundary: `GET /evaluation` and `GET /health`.
//!
//! # Architecture
//!
//! - [`url_params`] / [`validate_urls`] - query decoding and scheme checks
//! - [`router`] / [`AppState`] - axum routing over the shared downloader
//! - [`EvaluationServer`] - listener lifecycle with graceful shutdown
//! - [`ApiError`] - every failure becomes `400 BadDataException: <message>`

mod error;
mod handler;
mod query;
mod response;
mod server;

pub use error::{ALLOWED_SCHEMES, ApiError, BAD_DATA_PREFIX, UrlValidationError};
pub use handler::{AppState, router};
pub use query::{URL_PARAM, url_params, validate_url, validate_urls};
pub use response::EvaluationResponse;
pub use server::EvaluationServer;
