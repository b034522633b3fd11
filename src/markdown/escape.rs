//! Pure HTML escaping utilities.
//!
//! Everything the renderer emits as text passes through [`escape_html`]
//! exactly once; link targets additionally go through [`escape_href`] before
//! being embedded in an attribute.

use std::borrow::Cow;

use memchr::memchr3;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Escape `&`, `<`, and `>` for safe embedding in HTML text content.
///
/// Returns the input borrowed when there is nothing to escape, which is the
/// common case for note text.
///
/// # Examples
///
/// ```
/// use lifequest::markdown::escape_html;
///
/// assert_eq!(escape_html("plain text"), "plain text");
/// assert_eq!(escape_html("<script>"), "&lt;script&gt;");
/// assert_eq!(escape_html("a & b"), "a &amp; b");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let Some(first) = memchr3(b'&', b'<', b'>', text.as_bytes()) else {
        return Cow::Borrowed(text);
    };

    let mut result = String::with_capacity(text.len() + 8);
    result.push_str(&text[..first]);
    for c in text[first..].chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Characters that must not appear raw inside a double-quoted `href`.
const HREF_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// Percent-encode a link target for embedding in an `href` attribute.
///
/// Only characters that could break out of the attribute (quotes, angle
/// brackets, whitespace, controls) are encoded; everything else passes
/// through so already-encoded URLs stay readable.
///
/// # Examples
///
/// ```
/// use lifequest::markdown::escape_href;
///
/// assert_eq!(escape_href("https://example.com/a?b=c"), "https://example.com/a?b=c");
/// assert_eq!(escape_href("https://example.com/my page"), "https://example.com/my%20page");
/// ```
pub fn escape_href(url: &str) -> String {
    utf8_percent_encode(url, HREF_UNSAFE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_clean_text_is_borrowed() {
        let input = "nothing special here";
        assert!(matches!(escape_html(input), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_ampersand() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
    }

    #[test]
    fn test_escape_angle_brackets() {
        assert_eq!(escape_html("<b>hi</b>"), "&lt;b&gt;hi&lt;/b&gt;");
    }

    #[test]
    fn test_escape_mixed_with_unicode() {
        assert_eq!(escape_html("café <&> naïve"), "café &lt;&amp;&gt; naïve");
    }

    #[test]
    fn test_escape_prefix_copied_verbatim() {
        assert_eq!(escape_html("abc<def"), "abc&lt;def");
    }

    #[test]
    fn test_escape_href_plain_url() {
        assert_eq!(
            escape_href("https://example.com/path?q=1#frag"),
            "https://example.com/path?q=1#frag"
        );
    }

    #[test]
    fn test_escape_href_spaces_and_quotes() {
        assert_eq!(escape_href("a b\"c"), "a%20b%22c");
    }

    #[test]
    fn test_escape_href_single_quote() {
        assert_eq!(escape_href("x'y"), "x%27y");
    }

    #[test]
    fn test_escape_href_unicode() {
        assert_eq!(
            escape_href("https://example.com/café"),
            "https://example.com/caf%C3%A9"
        );
    }
}
