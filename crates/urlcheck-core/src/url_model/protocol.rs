//! Scheme prefix handling (`http://` / `https://`, case-insensitive).

const PROTOCOLS: [&str; 2] = ["https://", "http://"];

/// Returns the remainder of `url` after a leading `http://` or `https://`,
/// or `None` if neither prefix is present.
pub fn strip_protocol(url: &str) -> Option<&str> {
    PROTOCOLS.iter().find_map(|proto| {
        let head = url.get(..proto.len())?;
        if head.eq_ignore_ascii_case(proto) {
            Some(&url[proto.len()..])
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_either_scheme_any_case() {
        assert_eq!(strip_protocol("https://example.com"), Some("example.com"));
        assert_eq!(strip_protocol("http://example.com/x"), Some("example.com/x"));
        assert_eq!(strip_protocol("HtTpS://a.io"), Some("a.io"));
    }

    #[test]
    fn missing_scheme() {
        assert_eq!(strip_protocol("example.com"), None);
        assert_eq!(strip_protocol("httpx://example.com"), None);
        assert_eq!(strip_protocol("é"), None);
    }
}
