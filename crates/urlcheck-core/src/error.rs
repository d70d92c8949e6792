//! Error taxonomy surfaced to the user.
//!
//! Every failure path of a check session ends in one of these; the `Display`
//! text is exactly what the presenter shows.

use thiserror::Error;

/// Why a check session ended in the `Invalid` status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Input was blank or whitespace-only.
    #[error("Please enter a URL")]
    EmptyInput,
    /// Input failed the URL grammar.
    #[error("Invalid URL format")]
    MalformedFormat,
    /// The existence checker returned an error (or timed out).
    #[error("Error checking URL")]
    CheckFailed,
    /// The existence checker resolved with `exists = false`.
    #[error("URL does not exist")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_display_text() {
        assert_eq!(InputError::EmptyInput.to_string(), "Please enter a URL");
        assert_eq!(InputError::MalformedFormat.to_string(), "Invalid URL format");
        assert_eq!(InputError::CheckFailed.to_string(), "Error checking URL");
        assert_eq!(InputError::NotFound.to_string(), "URL does not exist");
    }
}
