//! Inline Markdown formatting.
//!
//! A single left-to-right scan over the line. At each delimiter byte the
//! scanner tries to match a complete construct (longest marker first); on a
//! match the whole span is emitted at once and the scan resumes after it, so
//! later text can never corrupt HTML that was already produced. Code span
//! contents are escaped but receive no further formatting. Anything that
//! fails to match degrades to literal escaped text.

use memchr::{memchr, memmem};

use super::escape::{escape_href, escape_html};

/// Nesting cap for emphasis recursion. Past this the remainder is emitted
/// as escaped literal text so adversarial input cannot exhaust the stack.
const MAX_DEPTH: usize = 16;

/// Render the inline constructs of a single line or span to HTML.
///
/// Total over all strings; unmatched markers are left as literal text.
///
/// # Examples
///
/// ```
/// use lifequest::markdown::render_inline;
///
/// assert_eq!(render_inline("**bold**"), "<strong>bold</strong>");
/// assert_eq!(render_inline("a < b"), "a &lt; b");
/// assert_eq!(render_inline("snake_case"), "snake_case");
/// ```
pub fn render_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    write_inline(text, 0, &mut out);
    out
}

fn write_inline(text: &str, depth: usize, out: &mut String) {
    if depth > MAX_DEPTH {
        out.push_str(&escape_html(text));
        return;
    }

    let bytes = text.as_bytes();
    let mut plain_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        let is_delim = matches!(bytes[i], b'`' | b'*' | b'_' | b'~' | b'=' | b'[');
        if !is_delim {
            // Delimiters are ASCII, so byte-wise stepping never lands
            // mid-character at a slice boundary.
            i += 1;
            continue;
        }

        out.push_str(&escape_html(&text[plain_start..i]));
        plain_start = i;

        if let Some(end) = render_construct(text, i, depth, out) {
            i = end;
            plain_start = end;
        } else {
            i += 1;
        }
    }
    out.push_str(&escape_html(&text[plain_start..]));
}

/// Try to match and emit one construct starting at byte `i`.
///
/// Returns the byte index just past the construct, or `None` (having written
/// nothing) when the position does not start a complete construct.
fn render_construct(text: &str, i: usize, depth: usize, out: &mut String) -> Option<usize> {
    match text.as_bytes()[i] {
        b'`' => render_code(text, i, out),
        b'*' | b'_' => render_emphasis(text, i, depth, out),
        b'~' => render_wrapped(text, i, "~~", "<del>", "</del>", depth, out),
        b'=' => render_wrapped(text, i, "==", "<mark>", "</mark>", depth, out),
        b'[' => render_bracket(text, i, depth, out),
        _ => None,
    }
}

/// `` `code` `` — contents are escaped only, never formatted.
fn render_code(text: &str, i: usize, out: &mut String) -> Option<usize> {
    let rest = &text.as_bytes()[i + 1..];
    let close = memchr(b'`', rest)?;
    if close == 0 {
        return None;
    }
    out.push_str("<code>");
    out.push_str(&escape_html(&text[i + 1..i + 1 + close]));
    out.push_str("</code>");
    Some(i + 1 + close + 1)
}

/// `***x***` / `**x**` / `*x*` and the underscore equivalents.
fn render_emphasis(text: &str, i: usize, depth: usize, out: &mut String) -> Option<usize> {
    let bytes = text.as_bytes();
    let delim = bytes[i];
    let run = bytes[i..].iter().take_while(|&&b| b == delim).count().min(3);

    // Longest marker first so ** is never swallowed by *
    for width in (1..=run).rev() {
        let start = i + width;
        let close = if delim == b'_' && width == 1 {
            // Intra-word underscores (snake_case) are not emphasis
            if i > 0 && bytes[i - 1].is_ascii_alphanumeric() {
                continue;
            }
            find_underscore_close(bytes, start)
        } else {
            find_marker(bytes, start, delim, width)
        };
        let Some(close) = close else {
            continue;
        };

        let (open_tag, close_tag) = match width {
            3 => ("<strong><em>", "</em></strong>"),
            2 => ("<strong>", "</strong>"),
            _ => ("<em>", "</em>"),
        };
        out.push_str(open_tag);
        write_inline(&text[start..close], depth + 1, out);
        out.push_str(close_tag);
        return Some(close + width);
    }
    None
}

/// Find `width` consecutive `delim` bytes at or after `from`, requiring at
/// least one byte of content before them.
fn find_marker(bytes: &[u8], from: usize, delim: u8, width: usize) -> Option<usize> {
    let marker = [delim; 3];
    let pos = memmem::find(&bytes[from..], &marker[..width])?;
    if pos == 0 {
        return None;
    }
    Some(from + pos)
}

/// Find a closing `_` that sits on a word boundary (not followed by an
/// alphanumeric character).
fn find_underscore_close(bytes: &[u8], from: usize) -> Option<usize> {
    let mut search = from;
    while let Some(pos) = memchr(b'_', &bytes[search..]) {
        let j = search + pos;
        if j > from && (j + 1 == bytes.len() || !bytes[j + 1].is_ascii_alphanumeric()) {
            return Some(j);
        }
        search = j + 1;
    }
    None
}

/// Symmetric two-character markers: `~~x~~`, `==x==`.
fn render_wrapped(
    text: &str,
    i: usize,
    marker: &str,
    open_tag: &str,
    close_tag: &str,
    depth: usize,
    out: &mut String,
) -> Option<usize> {
    if !text[i..].starts_with(marker) {
        return None;
    }
    let start = i + marker.len();
    let pos = memmem::find(&text.as_bytes()[start..], marker.as_bytes())?;
    if pos == 0 {
        return None;
    }
    out.push_str(open_tag);
    write_inline(&text[start..start + pos], depth + 1, out);
    out.push_str(close_tag);
    Some(start + pos + marker.len())
}

/// `[[tag]]` internal references and `[text](url)` links.
///
/// Wikilinks are tried first since a wikilink also starts with `[`.
fn render_bracket(text: &str, i: usize, depth: usize, out: &mut String) -> Option<usize> {
    let bytes = text.as_bytes();

    if text[i..].starts_with("[[")
        && let Some(pos) = memmem::find(&bytes[i + 2..], b"]]")
        && pos > 0
    {
        out.push_str("<span class=\"wikilink\">");
        out.push_str(&escape_html(&text[i + 2..i + 2 + pos]));
        out.push_str("</span>");
        return Some(i + 2 + pos + 2);
    }

    let close = i + 1 + memchr(b']', &bytes[i + 1..])?;
    if close == i + 1 {
        return None;
    }
    if bytes.get(close + 1) != Some(&b'(') {
        return None;
    }
    let url_start = close + 2;
    let paren = url_start + memchr(b')', &bytes[url_start..])?;
    if paren == url_start {
        return None;
    }

    out.push_str("<a href=\"");
    out.push_str(&escape_href(&text[url_start..paren]));
    out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
    write_inline(&text[i + 1..close], depth + 1, out);
    out.push_str("</a>");
    Some(paren + 1)
}
