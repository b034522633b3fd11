//! Block-level Markdown rendering.
//!
//! The document is processed line by line in a single pass. Block context is
//! an explicit tagged state threaded through a fold over the lines, so the
//! transition table is testable on its own: `Normal`, inside a code fence
//! (verbatim capture), or inside a list of a given kind. Lists never leak —
//! any open list is closed at a blank line, at the next non-list block, and
//! at end of input.

use super::escape::escape_html;
use super::inline::render_inline;

/// Which kind of list block is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

/// Block-level parser state carried from one line to the next.
///
/// Scoped to a single [`render_markdown`] call; discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockState {
    /// Between blocks.
    Normal,
    /// Inside a ``` fence; lines are captured (escaped) until the closing
    /// fence, then flushed as one preformatted block.
    InCodeFence { buffer: String },
    /// Inside an open `<ul>` or `<ol>`.
    InList(ListKind),
}

/// Render a restricted-Markdown document to an HTML fragment.
///
/// Total over all strings: never panics, and malformed markup degrades to
/// literal escaped text. Output is deterministic — the same input always
/// produces byte-identical HTML.
///
/// # Examples
///
/// ```
/// use lifequest::render_markdown;
///
/// assert_eq!(render_markdown("# Hello"), "<h1>Hello</h1>\n");
/// assert_eq!(
///     render_markdown("- one\n- two"),
///     "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n"
/// );
/// ```
pub fn render_markdown(source: &str) -> String {
    let mut out = String::with_capacity(source.len() + source.len() / 2);
    let mut state = BlockState::Normal;
    for line in source.lines() {
        state = step(state, line, &mut out);
    }
    finish(state, &mut out);
    out
}

/// Process one line: emit any HTML it produces and return the next state.
pub fn step(state: BlockState, line: &str, out: &mut String) -> BlockState {
    if let BlockState::InCodeFence { mut buffer } = state {
        if line.trim_start().starts_with("```") {
            flush_code(&buffer, out);
            return BlockState::Normal;
        }
        buffer.push_str(&escape_html(line));
        buffer.push('\n');
        return BlockState::InCodeFence { buffer };
    }

    let list = match state {
        BlockState::InList(kind) => Some(kind),
        _ => None,
    };
    let trimmed = line.trim();

    if trimmed.starts_with("```") {
        close_list(list, out);
        return BlockState::InCodeFence {
            buffer: String::new(),
        };
    }

    if trimmed.is_empty() {
        close_list(list, out);
        out.push_str("<div class=\"spacer\"></div>\n");
        return BlockState::Normal;
    }

    if let Some((level, text)) = parse_heading(trimmed) {
        close_list(list, out);
        let body = render_inline(text);
        out.push_str(&format!("<h{level}>{body}</h{level}>\n"));
        return BlockState::Normal;
    }

    if let Some(text) = trimmed.strip_prefix("> ") {
        close_list(list, out);
        out.push_str(&format!("<blockquote>{}</blockquote>\n", render_inline(text)));
        return BlockState::Normal;
    }

    if is_horizontal_rule(trimmed) {
        close_list(list, out);
        out.push_str("<hr />\n");
        return BlockState::Normal;
    }

    // Before generic bullets: a task line also matches the bullet pattern
    if let Some((checked, text)) = parse_task_item(trimmed) {
        let state = continue_list(list, ListKind::Unordered, out);
        if checked {
            out.push_str(&format!(
                "<li class=\"task done\"><input type=\"checkbox\" checked disabled /> <s>{}</s></li>\n",
                render_inline(text)
            ));
        } else {
            out.push_str(&format!(
                "<li class=\"task\"><input type=\"checkbox\" disabled /> {}</li>\n",
                render_inline(text)
            ));
        }
        return state;
    }

    if let Some(text) = parse_bullet(trimmed) {
        let state = continue_list(list, ListKind::Unordered, out);
        out.push_str(&format!("<li>{}</li>\n", render_inline(text)));
        return state;
    }

    if let Some(text) = parse_ordered_item(trimmed) {
        let state = continue_list(list, ListKind::Ordered, out);
        out.push_str(&format!("<li>{}</li>\n", render_inline(text)));
        return state;
    }

    close_list(list, out);
    out.push_str(&format!("<p>{}</p>\n", render_inline(trimmed)));
    BlockState::Normal
}

/// Flush any state still open at end of input.
///
/// An unterminated fence flushes its captured lines as code; an open list
/// gets its closing tag.
pub fn finish(state: BlockState, out: &mut String) {
    match state {
        BlockState::Normal => {}
        BlockState::InCodeFence { buffer } => flush_code(&buffer, out),
        BlockState::InList(kind) => close_list(Some(kind), out),
    }
}

fn flush_code(buffer: &str, out: &mut String) {
    out.push_str("<pre><code>");
    out.push_str(buffer);
    out.push_str("</code></pre>\n");
}

fn close_list(list: Option<ListKind>, out: &mut String) {
    match list {
        Some(ListKind::Unordered) => out.push_str("</ul>\n"),
        Some(ListKind::Ordered) => out.push_str("</ol>\n"),
        None => {}
    }
}

/// Continue the current list if it has the wanted kind, otherwise close it
/// (if any) and open a new one.
fn continue_list(list: Option<ListKind>, want: ListKind, out: &mut String) -> BlockState {
    if list != Some(want) {
        close_list(list, out);
        match want {
            ListKind::Unordered => out.push_str("<ul>\n"),
            ListKind::Ordered => out.push_str("<ol>\n"),
        }
    }
    BlockState::InList(want)
}

/// `#` through `######` followed by a space. Counting the prefix means a
/// longer run can never be swallowed by a shorter match.
fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    line[level..].strip_prefix(' ').map(|text| (level, text))
}

/// A line consisting solely of 3+ repeated `-`, `*`, or `_`.
fn is_horizontal_rule(line: &str) -> bool {
    let bytes = line.as_bytes();
    if bytes.len() < 3 || !matches!(bytes[0], b'-' | b'*' | b'_') {
        return false;
    }
    bytes.iter().all(|&b| b == bytes[0])
}

/// `- [ ] text` or `- [x] text`, case-insensitive on the `x`.
fn parse_task_item(line: &str) -> Option<(bool, &str)> {
    let rest = line.strip_prefix("- [")?;
    let mut chars = rest.chars();
    let checked = match chars.next()? {
        ' ' => false,
        'x' | 'X' => true,
        _ => return None,
    };
    let text = chars.as_str().strip_prefix("] ")?;
    Some((checked, text))
}

/// `-`, `*`, or `+` followed by a space.
fn parse_bullet(line: &str) -> Option<&str> {
    line.strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .or_else(|| line.strip_prefix("+ "))
}

/// One or more digits, then `. `.
fn parse_ordered_item(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ")
}
