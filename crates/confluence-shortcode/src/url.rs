//! Tiny URL construction and resolution.

use crate::codec::{decode, encode};
use crate::error::ShortUrlError;

/// Path segment that precedes the short code in a tiny URL.
const MARKER: &str = "/x/";

/// Build a tiny URL from a base URL and a short code.
///
/// Trailing slashes on the base URL are collapsed. The code is appended
/// verbatim, even when it starts with `/`.
pub fn short_url(base_url: &str, code: &str) -> String {
    format!("{}{MARKER}{code}", base_url.trim_end_matches('/'))
}

/// Build the tiny URL for a page id.
pub fn page_short_url(base_url: &str, id: u64) -> String {
    short_url(base_url, &encode(id))
}

/// Resolve a tiny URL to the page id it points at.
///
/// The short code is the text after the first `/x/` segment, up to any
/// query string or fragment. Codes may contain `/x/` themselves, so the
/// first segment is the only unambiguous choice without knowing the base
/// URL. When the base URL itself contains `/x/`, use
/// [`parse_short_url_with_base`].
///
/// # Errors
///
/// Returns [`ShortUrlError::MissingMarker`] if the URL has no `/x/` segment
/// and [`ShortUrlError::Decode`] if the code is invalid.
pub fn parse_short_url(url: &str) -> Result<u64, ShortUrlError> {
    let Some((_, rest)) = url.split_once(MARKER) else {
        return Err(ShortUrlError::MissingMarker {
            url: url.to_owned(),
        });
    };
    decode_code(url, rest)
}

/// Resolve a tiny URL built under a known base URL.
///
/// Strips the exact `<base_url>/x/` prefix that [`short_url`] produces,
/// so neither the base nor the code is confused by an `/x/` inside it.
///
/// # Errors
///
/// Returns [`ShortUrlError::ForeignBase`] if the URL does not start with
/// `<base_url>/x/` and [`ShortUrlError::Decode`] if the code is invalid.
pub fn parse_short_url_with_base(base_url: &str, url: &str) -> Result<u64, ShortUrlError> {
    let prefix = short_url(base_url, "");
    let Some(rest) = url.strip_prefix(&prefix) else {
        return Err(ShortUrlError::ForeignBase {
            url: url.to_owned(),
            base_url: base_url.to_owned(),
        });
    };
    decode_code(url, rest)
}

/// Decode the code at the start of `rest`, ignoring query and fragment.
fn decode_code(url: &str, rest: &str) -> Result<u64, ShortUrlError> {
    let code = rest.split(['?', '#']).next().unwrap_or_default();
    tracing::debug!(url, code, "Resolving tiny URL");
    Ok(decode(code)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::DecodeError;

    #[test]
    fn test_short_url() {
        assert_eq!(
            short_url("https://wiki.example.com", "0gKWSQ"),
            "https://wiki.example.com/x/0gKWSQ"
        );
    }

    #[test]
    fn test_short_url_collapses_trailing_slashes() {
        assert_eq!(
            short_url("https://wiki.example.com/confluence//", "AQ"),
            "https://wiki.example.com/confluence/x/AQ"
        );
    }

    #[test]
    fn test_short_url_keeps_leading_slash_in_code() {
        assert_eq!(
            short_url("https://wiki.example.com", "/w"),
            "https://wiki.example.com/x//w"
        );
    }

    #[test]
    fn test_page_short_url() {
        assert_eq!(
            page_short_url("http://localhost:8090/", 1),
            "http://localhost:8090/x/AQ"
        );
    }

    #[test]
    fn test_parse_short_url() {
        assert_eq!(
            parse_short_url("https://wiki.example.com/x/0gKWSQ").unwrap(),
            1_234_567_890
        );
    }

    #[test]
    fn test_parse_short_url_ignores_query_and_fragment() {
        assert_eq!(parse_short_url("https://wiki.example.com/x/AQ?src=mail").unwrap(), 1);
        assert_eq!(parse_short_url("https://wiki.example.com/x/AAE#top").unwrap(), 256);
    }

    #[test]
    fn test_parse_short_url_code_with_slash() {
        let url = page_short_url("https://wiki.example.com", u64::MAX);
        assert_eq!(parse_short_url(&url).unwrap(), u64::MAX);
    }

    #[test]
    fn test_parse_short_url_empty_code_is_zero() {
        assert_eq!(parse_short_url("https://wiki.example.com/x/").unwrap(), 0);
    }

    #[test]
    fn test_parse_short_url_with_base_marker_in_base() {
        let base = "https://wiki.example.com/x/confluence";
        let url = page_short_url(base, 1);
        assert_eq!(url, "https://wiki.example.com/x/confluence/x/AQ");
        assert_eq!(parse_short_url_with_base(base, &url).unwrap(), 1);
    }

    #[test]
    fn test_parse_short_url_with_base_trailing_slash() {
        let url = page_short_url("https://wiki.example.com", 1_234_567_890);
        assert_eq!(
            parse_short_url_with_base("https://wiki.example.com/", &url).unwrap(),
            1_234_567_890
        );
    }

    #[test]
    fn test_parse_short_url_with_base_marker_in_code() {
        let base = "https://wiki.example.com";
        let url = short_url(base, "/x/8");
        assert_eq!(
            parse_short_url_with_base(base, &url).unwrap(),
            decode("/x/8").unwrap()
        );
    }

    #[test]
    fn test_parse_short_url_with_base_foreign_url() {
        let err = parse_short_url_with_base(
            "https://wiki.example.com/confluence",
            "https://other.example.com/x/AQ",
        )
        .unwrap_err();
        assert!(matches!(err, ShortUrlError::ForeignBase { .. }), "{err:?}");
    }

    #[test]
    fn test_parse_short_url_missing_marker() {
        let err = parse_short_url("https://wiki.example.com/display/DOC/Home").unwrap_err();
        assert!(
            matches!(err, ShortUrlError::MissingMarker { .. }),
            "{err:?}"
        );
    }

    #[test]
    fn test_parse_short_url_invalid_code() {
        let err = parse_short_url("https://wiki.example.com/x/!!").unwrap_err();
        assert!(
            matches!(err, ShortUrlError::Decode(DecodeError::Base64 { .. })),
            "{err:?}"
        );
    }
}
