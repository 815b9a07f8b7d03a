//! Identifiers that can never be assigned as short links.
//!
//! The set covers the service's own routes, common web-app paths that must
//! not be hijacked, and administrative names. The built-in list can be
//! extended at startup from a file (see [`ReservedWords::load`]).

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

/// Built-in reserved identifiers. The empty string stands for the root path.
const DEFAULT_RESERVED: &[&str] = &[
    // service routes
    "", "shorten", "stats", "ping", "health", "delete_url", "docs",
    // auth and account pages
    "login", "logout", "register", "signin", "signup", "auth", "oauth", "callback",
    "forgot-password", "reset-password", "account", "profile", "settings", "user",
    // framework and crawler conventions
    "api", "_next", "_vercel", "vercel", "favicon", "favicon.ico", "robots",
    "robots.txt", "sitemap", "sitemap.xml", "webhook", "webhooks",
    // site sections
    "home", "dashboard", "about", "contact", "help", "support", "terms", "privacy",
    "policy", "blog", "news", "shop", "store", "download", "upload",
    // static assets
    "public", "static", "assets", "images", "img", "css", "js", "fonts", "file",
    "files", "media",
    // errors and monitoring
    "404", "500", "error", "not-found", "status", "metrics", "monitoring",
    // administrative and system names
    "admin", "administrator", "manage", "management", "console", "root", "www",
    "mail", "email", "ftp",
    // locale prefixes
    "pt", "en", "es", "fr", "de",
];

/// Set of reserved identifiers.
///
/// Membership is exact and case-sensitive; callers pass already-lowercased
/// aliases. Entries loaded from files are lowercased on insert.
#[derive(Debug, Clone)]
pub struct ReservedWords {
    words: HashSet<String>,
}

impl ReservedWords {
    /// Creates a set from the given words only, without the built-ins.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// Loads the built-in list, extended by `path` if given.
    ///
    /// # File Format
    ///
    /// One identifier per line. Blank lines and lines starting with `#` are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut reserved = Self::default();

        if let Some(path) = path {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read reserved words from {}", path.display()))?;
            let before = reserved.len();
            reserved.extend_from_str(&content);
            tracing::info!(
                file = %path.display(),
                added = reserved.len() - before,
                "Loaded additional reserved words"
            );
        }

        Ok(reserved)
    }

    /// Adds the identifiers listed in `content` (one per line).
    pub fn extend_from_str(&mut self, content: &str) {
        self.words.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_lowercase),
        );
    }

    /// Returns whether `id` is reserved.
    pub fn contains(&self, id: &str) -> bool {
        self.words.contains(id)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for ReservedWords {
    fn default() -> Self {
        Self {
            words: DEFAULT_RESERVED.iter().map(|w| w.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_contains_service_routes() {
        let reserved = ReservedWords::default();
        for word in ["", "shorten", "stats", "ping", "health"] {
            assert!(reserved.contains(word), "{word:?} should be reserved");
        }
    }

    #[test]
    fn test_default_contains_web_conventions() {
        let reserved = ReservedWords::default();
        for word in ["login", "api", "_next", "favicon", "robots", "sitemap"] {
            assert!(reserved.contains(word), "{word:?} should be reserved");
        }
    }

    #[test]
    fn test_membership_is_exact() {
        let reserved = ReservedWords::default();
        assert!(!reserved.contains("login2"));
        assert!(!reserved.contains("my-link"));
        assert!(!reserved.contains("LOGIN"));
    }

    #[test]
    fn test_extend_from_str() {
        let mut reserved = ReservedWords::default();
        reserved.extend_from_str("# campaign words\n\n  Promo \nlaunch\n");

        assert!(reserved.contains("promo"));
        assert!(reserved.contains("launch"));
        assert!(!reserved.contains("# campaign words"));
    }

    #[test]
    fn test_new_without_defaults() {
        let reserved = ReservedWords::new(["Alpha", " beta "]);
        assert_eq!(reserved.len(), 2);
        assert!(reserved.contains("alpha"));
        assert!(reserved.contains("beta"));
        assert!(!reserved.contains("shorten"));
    }

    #[test]
    fn test_load_without_file_is_default() {
        let reserved = ReservedWords::load(None).unwrap();
        assert_eq!(reserved.len(), ReservedWords::default().len());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let result = ReservedWords::load(Some(Path::new("/nonexistent/reserved.txt")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("reserved-words-{}.txt", std::process::id()));
        std::fs::write(&path, "pricing\nCareers\n").unwrap();

        let reserved = ReservedWords::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(reserved.contains("pricing"));
        assert!(reserved.contains("careers"));
        assert!(reserved.contains("shorten"));
    }
}
