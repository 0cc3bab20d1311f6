//! Constants for the fetch module (timeouts, body limits).

/// Default HTTP connect timeout (10 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default whole-request timeout (30 seconds).
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default maximum accepted CSV body size (16 MiB).
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;
