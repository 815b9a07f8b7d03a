//! Custom alias sanitization and validation.
//!
//! A user-supplied alias goes through two independent steps:
//!
//! 1. [`sanitize_alias`] turns arbitrary input into a candidate made only of
//!    `[a-z0-9_-]`. It never fails.
//! 2. [`validate_alias`] decides whether that candidate is acceptable.
//!
//! The reserved-word check ([`crate::utils::reserved_words`]) and the store's
//! uniqueness check run after these, in that order.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Maximum length of a sanitized alias, in characters.
pub const MAX_ALIAS_LENGTH: usize = 50;

/// Minimum length of an acceptable alias.
pub const MIN_ALIAS_LENGTH: usize = 2;

/// Words that look like system accounts or hosts.
const BLOCKED_WORDS: &[&str] = &["admin", "root", "api", "www", "mail"];

static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_-]").expect("valid regex"));

static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_]{2,}").expect("valid regex"));

const SEPARATORS: [char; 2] = ['-', '_'];

/// Reason an alias was rejected by [`validate_alias`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AliasRejection {
    #[error("empty after sanitization")]
    Empty,

    #[error("too short")]
    TooShort,

    #[error("numeric-only")]
    NumericOnly,

    #[error("disallowed pattern")]
    DisallowedPattern,

    #[error("only separators")]
    OnlySeparators,
}

/// Normalizes a raw alias into a safe identifier candidate.
///
/// # Steps
///
/// 1. Trim surrounding whitespace
/// 2. Lowercase
/// 3. Decompose accented characters and drop the combining marks (`café` → `cafe`)
/// 4. Drop everything outside `[a-z0-9_-]`
/// 5. Collapse runs of two or more `-`/`_` into a single `-`
/// 6. Strip leading and trailing `-`/`_`
/// 7. Truncate to [`MAX_ALIAS_LENGTH`] characters
///
/// Trailing separators exposed by the truncation are stripped again, so the
/// function is idempotent. Returns an empty string if nothing survives.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(sanitize_alias("  Café!! "), "cafe");
/// assert_eq!(sanitize_alias("my__cool--link"), "my-cool-link");
/// ```
pub fn sanitize_alias(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();

    let decomposed: String = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();

    let allowed = DISALLOWED_CHARS.replace_all(&decomposed, "");
    let collapsed = SEPARATOR_RUNS.replace_all(&allowed, "-");
    let trimmed = collapsed.trim_matches(SEPARATORS.as_slice());

    // Only ASCII survives step 4, so byte and char lengths agree.
    let truncated = &trimmed[..trimmed.len().min(MAX_ALIAS_LENGTH)];

    truncated.trim_end_matches(SEPARATORS.as_slice()).to_string()
}

/// Checks a sanitized alias against the acceptance rules.
///
/// # Rules
///
/// Checked in order, first failure wins:
///
/// - Empty → [`AliasRejection::Empty`]
/// - Shorter than [`MIN_ALIAS_LENGTH`] → [`AliasRejection::TooShort`]
/// - Digits only → [`AliasRejection::NumericOnly`]
/// - One of `admin`, `root`, `api`, `www`, `mail` → [`AliasRejection::DisallowedPattern`]
/// - Separators only → [`AliasRejection::OnlySeparators`]
///
/// # Errors
///
/// Returns the first [`AliasRejection`] that applies.
pub fn validate_alias(sanitized: &str) -> Result<(), AliasRejection> {
    if sanitized.is_empty() {
        return Err(AliasRejection::Empty);
    }

    if sanitized.chars().count() < MIN_ALIAS_LENGTH {
        return Err(AliasRejection::TooShort);
    }

    if sanitized.chars().all(|c| c.is_ascii_digit()) {
        return Err(AliasRejection::NumericOnly);
    }

    if BLOCKED_WORDS.contains(&sanitized) {
        return Err(AliasRejection::DisallowedPattern);
    }

    // Unreachable for sanitized input, kept for callers passing raw strings.
    if sanitized.chars().all(|c| SEPARATORS.contains(&c)) {
        return Err(AliasRejection::OnlySeparators);
    }

    Ok(())
}
