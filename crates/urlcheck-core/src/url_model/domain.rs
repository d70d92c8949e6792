//! Host grammar.
//!
//! `label ( "." suffix )+` where `label` is 1-63 ASCII alphanumerics or
//! hyphens that neither starts nor ends with a hyphen, and each `suffix` is
//! 2-6 ASCII letters. IP literals, ports and single-label hosts never match.

const MAX_LABEL_LEN: usize = 63;
const MIN_SUFFIX_LEN: usize = 2;
const MAX_SUFFIX_LEN: usize = 6;

/// Returns true if `domain` matches the host grammar in full.
pub fn is_valid_domain(domain: &str) -> bool {
    let mut parts = domain.split('.');

    let label = match parts.next() {
        Some(l) => l,
        None => return false,
    };
    if !is_valid_label(label) {
        return false;
    }

    let mut suffixes = 0usize;
    for suffix in parts {
        if !is_valid_suffix(suffix) {
            return false;
        }
        suffixes += 1;
    }
    suffixes > 0
}

fn is_valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            bytes.len() <= MAX_LABEL_LEN
                && first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
        _ => false,
    }
}

fn is_valid_suffix(suffix: &str) -> bool {
    (MIN_SUFFIX_LEN..=MAX_SUFFIX_LEN).contains(&suffix.len())
        && suffix.bytes().all(|b| b.is_ascii_alphabetic())
}
