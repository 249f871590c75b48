//! Input validation for submitted URLs and short id path segments.

use url::Url;
use validator::ValidationError;

use crate::error::AppError;

/// Returns true if `candidate` is an absolute web URL.
///
/// Accepts only the `http` and `https` schemes with a non-empty host.
/// The input must already be a URI: characters outside the URI set
/// (whitespace, raw non-ASCII) and broken `%` escapes are rejected rather
/// than letting [`Url::parse`] trim or encode them, since the URL is stored
/// and redirected to exactly as submitted.
pub fn is_valid_url(candidate: &str) -> bool {
    if candidate.is_empty()
        || !candidate.bytes().all(is_uri_byte)
        || !has_valid_percent_escapes(candidate)
    {
        return false;
    }

    let Ok(url) = Url::parse(candidate) else {
        return false;
    };

    matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty())
}

fn is_uri_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"-._~:/?#[]@!$&'()*+,;=%".contains(&b)
}

fn has_valid_percent_escapes(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}

/// Returns true if `candidate` is non-empty and made only of ASCII digits.
///
/// Leading zeros are allowed and the magnitude is not checked here; see
/// [`parse_short_id`].
pub fn is_valid_short_id(candidate: &str) -> bool {
    !candidate.is_empty() && candidate.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a short id path segment.
///
/// # Returns
///
/// - `Ok(Some(id))` for a digit string that fits in `i64` (`"007"` gives 7)
/// - `Ok(None)` for a digit string too large for any stored id
///
/// # Errors
///
/// Returns [`AppError::WrongFormat`] if the segment fails [`is_valid_short_id`].
pub fn parse_short_id(candidate: &str) -> Result<Option<i64>, AppError> {
    if !is_valid_short_id(candidate) {
        return Err(AppError::WrongFormat);
    }

    Ok(candidate.parse::<i64>().ok())
}

/// `validator` custom rule wrapping [`is_valid_url`].
pub fn validate_web_url(candidate: &str) -> Result<(), ValidationError> {
    if is_valid_url(candidate) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_url").with_message("invalid url".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_web_urls() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://www.freecodecamp.org/news/?q=rust#top"));
        assert!(is_valid_url("http://localhost:3000/path"));
        assert!(is_valid_url("https://127.0.0.1/"));
        assert!(is_valid_url("HTTPS://EXAMPLE.COM/Path"));
        assert!(is_valid_url("https://example.com/caf%C3%A9?q=a%20b"));
    }

    #[test]
    fn test_rejects_non_web_schemes() {
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("javascript:alert(1)"));
        assert!(!is_valid_url("mailto:someone@example.com"));
        assert!(!is_valid_url("file:///etc/passwd"));
    }

    #[test]
    fn test_rejects_relative_and_malformed() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("/api/shorturl"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("http://exa mple.com"));
        assert!(!is_valid_url(" https://example.com"));
        assert!(!is_valid_url("https://example.com\n"));
        assert!(!is_valid_url("https://example.com/ü"));
        assert!(!is_valid_url("https://exämple.com"));
        assert!(!is_valid_url("https://example.com/<script>"));
        assert!(!is_valid_url("https://example.com/a\"b"));
        assert!(!is_valid_url("https://example.com/100%"));
        assert!(!is_valid_url("https://example.com/%zz"));
        assert!(!is_valid_url("https://example.com/%4"));
    }

    #[test]
    fn test_short_id_digits_only() {
        assert!(is_valid_short_id("1"));
        assert!(is_valid_short_id("0"));
        assert!(is_valid_short_id("007"));
        assert!(is_valid_short_id("999999999999999999999999"));
    }

    #[test]
    fn test_short_id_rejects_non_digits() {
        assert!(!is_valid_short_id(""));
        assert!(!is_valid_short_id("abc"));
        assert!(!is_valid_short_id("1a"));
        assert!(!is_valid_short_id("a1"));
        assert!(!is_valid_short_id("-1"));
        assert!(!is_valid_short_id("+1"));
        assert!(!is_valid_short_id("1.5"));
        assert!(!is_valid_short_id(" 1"));
        assert!(!is_valid_short_id("١٢"));
    }

    #[test]
    fn test_parse_short_id() {
        assert_eq!(parse_short_id("42").unwrap(), Some(42));
        assert_eq!(parse_short_id("007").unwrap(), Some(7));
        assert_eq!(parse_short_id("99999999999999999999").unwrap(), None);
        assert!(matches!(parse_short_id("abc"), Err(AppError::WrongFormat)));
        assert!(matches!(parse_short_id(""), Err(AppError::WrongFormat)));
    }

    #[test]
    fn test_validate_web_url_message() {
        assert!(validate_web_url("https://example.com").is_ok());

        let err = validate_web_url("not a url").unwrap_err();
        assert_eq!(err.code, "invalid_url");
    }
}
