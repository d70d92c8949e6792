//! Path grammar: the part after the first `/` of the host.

/// Punctuation allowed in a path besides ASCII alphanumerics.
const PATH_PUNCT: &str = "-._~:/?#[]@!$&'()*+,;=";

/// Returns true if every character of `path` is in the allowed set.
/// An empty path is valid.
pub fn is_valid_path(path: &str) -> bool {
    path.chars()
        .all(|c| c.is_ascii_alphanumeric() || PATH_PUNCT.contains(c))
}
