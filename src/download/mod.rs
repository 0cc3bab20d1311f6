//! Concurrent fan-out over speech CSV resources.
//!
//! # Features
//!
//! - One Tokio task per URL, bounded by a shared semaphore
//! - Join barrier: every task finishes before a result is produced
//! - Results concatenated in input order, never completion order
//! - First failure surfaced as its own [`FetchError`](crate::fetch::FetchError)

mod engine;

pub use engine::{DEFAULT_CONCURRENCY, DownloaderError, FanOutDownloader};

// Note: we do NOT define module-local Result aliases.
// Use `Result<T, FetchError>` explicitly in function signatures.
