//! Target URL normalization.
//!
//! Scheme-less input is prefixed with `https://`; the result must then be an
//! absolute HTTP(S) URL with a host. The stored value is the trimmed,
//! possibly prefixed input rather than a re-serialized form, so
//! `example.com` becomes exactly `https://example.com`.

use url::Url;

/// Maximum accepted target URL length after normalization.
pub const MAX_URL_LENGTH: usize = 2048;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlNormalizationError {
    #[error("URL is empty")]
    Empty,

    #[error("URL exceeds {MAX_URL_LENGTH} characters")]
    TooLong,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,
}

/// Normalizes a target URL.
///
/// # Rules
///
/// 1. Surrounding whitespace is trimmed
/// 2. Input without `http://` or `https://` (any case) gets `https://` prepended,
///    unless it already names another scheme with `://`
/// 3. Control characters (tab and newline included) are rejected, since the
///    value must later fit in a `Location` header
/// 4. The result must parse, use HTTP or HTTPS, and have a non-empty host
///
/// # Errors
///
/// Returns [`UrlNormalizationError`] describing the first rule that failed.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("example.com").unwrap(), "https://example.com");
/// assert_eq!(normalize_url("http://example.com/a").unwrap(), "http://example.com/a");
/// assert!(normalize_url("ftp://example.com").is_err());
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    if trimmed.chars().any(|c| c.is_control()) {
        return Err(UrlNormalizationError::InvalidFormat(
            "contains control characters".to_string(),
        ));
    }

    let candidate = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else if trimmed.contains("://") {
        return Err(UrlNormalizationError::UnsupportedProtocol);
    } else {
        format!("https://{trimmed}")
    };

    if candidate.len() > MAX_URL_LENGTH {
        return Err(UrlNormalizationError::TooLong);
    }

    let url =
        Url::parse(&candidate).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::MissingHost);
    }

    Ok(candidate)
}

fn has_http_scheme(s: &str) -> bool {
    let lower = s.get(..8).unwrap_or(s).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
