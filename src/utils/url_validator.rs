//! URL validation for submitted bookmarks.
//!
//! Bookmarked URLs are stored exactly as submitted. Validation only checks
//! that the value parses as an absolute HTTP(S) URL.

use url::Url;

/// Returns true when `input` is an absolute URL with an `http` or `https`
/// scheme.
///
/// Scheme-relative and bare-host values (`example.com`) are rejected, as are
/// non-web schemes like `javascript:` and `file:`.
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
