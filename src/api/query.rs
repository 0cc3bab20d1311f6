//! Extraction and validation of `url` query parameters.

use std::collections::HashSet;

use tracing::{debug, trace};
use url::Url;

use super::error::{ALLOWED_SCHEMES, UrlValidationError};

/// Name of the repeated query parameter carrying CSV resource URLs.
pub const URL_PARAM: &str = "url";

/// Collects every `url` value from a raw query string, in order.
///
/// Values are percent-decoded. Repeated values are kept only at their first
/// position, so the same resource is never counted twice.
///
/// # Examples
///
/// ```
/// use speech_evaluator_core::api::url_params;
///
/// let urls = url_params(Some("url=https%3A%2F%2Fa.example%2F1.csv&x=1&url=https://b.example/2.csv"));
/// assert_eq!(urls, vec!["https://a.example/1.csv", "https://b.example/2.csv"]);
/// assert!(url_params(None).is_empty());
/// ```
#[must_use]
pub fn url_params(raw_query: Option<&str>) -> Vec<String> {
    let Some(raw_query) = raw_query else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut urls = Vec::new();
    for (key, value) in url::form_urlencoded::parse(raw_query.as_bytes()) {
        if key != URL_PARAM {
            continue;
        }
        let value = value.into_owned();
        if seen.insert(value.clone()) {
            urls.push(value);
        } else {
            trace!(url = %value, "dropping repeated url");
        }
    }
    urls
}

/// Parses a single value as an absolute `http` or `https` URL.
///
/// Scheme matching is case-insensitive.
///
/// # Errors
///
/// Returns [`UrlValidationError::Malformed`] if the value is not a URL and
/// [`UrlValidationError::UnsupportedScheme`] for any other scheme.
pub fn validate_url(raw: &str) -> Result<Url, UrlValidationError> {
    let url = parse_url(raw)?;
    check_scheme(raw, &url)?;
    Ok(url)
}

/// Validates every value in two passes: all values must parse before any
/// scheme is checked.
///
/// A list holding both an unparseable value and a disallowed scheme therefore
/// fails with [`UrlValidationError::Malformed`], whatever their order.
///
/// # Errors
///
/// Returns the first parse error, or else the first scheme error.
#[tracing::instrument(level = "debug", skip(raw), fields(count = raw.len()))]
pub fn validate_urls(raw: &[String]) -> Result<Vec<Url>, UrlValidationError> {
    let urls = raw
        .iter()
        .map(|value| parse_url(value))
        .collect::<Result<Vec<_>, _>>()?;
    for (value, url) in raw.iter().zip(&urls) {
        check_scheme(value, url)?;
    }
    debug!(count = urls.len(), "urls validated");
    Ok(urls)
}

fn parse_url(raw: &str) -> Result<Url, UrlValidationError> {
    Url::parse(raw).map_err(|e| UrlValidationError::malformed(raw, e))
}

fn check_scheme(raw: &str, url: &Url) -> Result<(), UrlValidationError> {
    // The url crate lowercases schemes while parsing.
    if ALLOWED_SCHEMES.contains(&url.scheme()) {
        Ok(())
    } else {
        Err(UrlValidationError::unsupported_scheme(raw, url.scheme()))
    }
}
