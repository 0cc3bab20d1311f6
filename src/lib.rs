//! Speech Evaluator Core Library
//!
//! This library downloads CSV files of political speeches from a set of
//! URLs, concurrently, and computes three statistics across all records:
//! who gave the most speeches in a reference year, who spoke most often on a
//! reference topic, and who used the fewest words overall.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`record`] - The `SpeechRecord` data model
//! - [`fetch`] - Retrieval and strict CSV parsing of a single resource
//! - [`download`] - Concurrent all-or-nothing fan-out over many resources
//! - [`evaluation`] - Extremum-with-uniqueness statistics
//! - [`api`] - The `GET /evaluation` HTTP boundary

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod download;
pub mod evaluation;
pub mod fetch;
pub mod record;
mod user_agent;

// Re-export commonly used types
pub use api::{ApiError, AppState, EvaluationResponse, EvaluationServer, UrlValidationError};
pub use download::{DEFAULT_CONCURRENCY, DownloaderError, FanOutDownloader};
pub use evaluation::{
    DEFAULT_EVALUATION_YEAR, DEFAULT_TOPIC, Evaluation, EvaluationCriteria, EvaluationError,
    evaluate,
};
pub use fetch::{FetchError, HttpFetcher, RecordSource, parse_records};
pub use record::SpeechRecord;
