//! User-Agent string sent with every CSV fetch.

/// Project URL for User-Agent identification (RFC 9308).
const PROJECT_UA_URL: &str = "https://github.com/fierce/speech-evaluator";

/// Default User-Agent for fetch requests (identifies the service).
#[must_use]
pub(crate) fn default_fetch_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("speech-evaluator/{version} (+{PROJECT_UA_URL})")
}
