//! Destination URL validation.

use url::Url;

/// Returns true if `input` parses as a URL with scheme `http` or `https`.
///
/// No network access and no normalization: the caller stores the input as
/// given.
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_url("https://example.com/path?q=1"));
/// assert!(!is_valid_url("ftp://example.com"));
/// assert!(!is_valid_url("example.com"));
/// ```
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_and_https_are_valid() {
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("https://example.com:8443/a/b?c=d#frag"));
        assert!(is_valid_url("HTTPS://EXAMPLE.COM"));
        assert!(is_valid_url("http://127.0.0.1:3000/"));
        assert!(is_valid_url("http://[::1]/"));
    }

    #[test]
    fn test_other_schemes_are_rejected() {
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("javascript:alert(1)"));
        assert!(!is_valid_url("data:text/html,hello"));
        assert!(!is_valid_url("file:///etc/passwd"));
        assert!(!is_valid_url("mailto:user@example.com"));
    }

    #[test]
    fn test_unparseable_input_is_rejected() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("/relative/path"));
        assert!(!is_valid_url("https://"));
    }
}
