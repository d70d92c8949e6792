//! URL format validation.
//!
//! Accepts a restricted URL grammar: optional `http://`/`https://` scheme,
//! a host made of one alphanumeric label plus alphabetic suffix groups, and
//! an optional path drawn from a fixed character set. Nothing is normalized;
//! the caller keeps the trimmed input as typed.

mod domain;
mod path;
mod protocol;

pub use domain::is_valid_domain;
pub use path::is_valid_path;
pub use protocol::strip_protocol;

use crate::error::InputError;

/// Checks `raw` against the URL grammar, distinguishing blank from malformed input.
///
/// On success returns the trimmed input, which is what gets handed to the
/// existence checker.
///
/// # Examples
///
/// - `check_format("  example.com ")` → `Ok("example.com")`
/// - `check_format("   ")` → `Err(InputError::EmptyInput)`
/// - `check_format("https://example.com/<script>")` → `Err(InputError::MalformedFormat)`
pub fn check_format(raw: &str) -> Result<&str, InputError> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(InputError::EmptyInput);
    }

    // Bare domains are treated as https.
    let rest = strip_protocol(url).unwrap_or(url);

    let (domain, path) = match rest.split_once('/') {
        Some((domain, path)) => (domain, path),
        None => (rest, ""),
    };

    if is_valid_domain(domain) && (path.is_empty() || is_valid_path(path)) {
        Ok(url)
    } else {
        Err(InputError::MalformedFormat)
    }
}

/// Returns true if `raw` is a syntactically valid URL for this widget.
pub fn validate(raw: &str) -> bool {
    check_format(raw).is_ok()
}
