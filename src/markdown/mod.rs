//! Restricted Markdown → HTML rendering for note previews.
//!
//! The renderer is a pure function of the source text, re-run on every
//! display with no retained intermediate representation. It is split into
//! two passes plus shared escaping:
//!
//! - [`escape`]: HTML escaping and `href` sanitization
//! - [`block`]: line-by-line block structure (headings, lists, quotes,
//!   fences) driven by an explicit state machine
//! - [`inline`]: character-level constructs (bold, italic, code, links)
//!   within a single line or span
//!
//! ## Design Notes
//!
//! - **Explicit block state**: block context is a tagged value
//!   (`Normal | InCodeFence | InList`) folded over the lines, never hidden
//!   mutable flags, so the transition table is testable in isolation
//! - **Whole-unit inline matching**: each inline construct is matched and
//!   emitted as a complete span in one left-to-right scan; code span
//!   contents are therefore protected from the emphasis rules
//! - **Escape once**: plain text is escaped exactly once, unconditionally,
//!   before any markup is emitted; raw HTML in the source can never reach
//!   the output alive
//! - **Best effort, always**: there is no invalid document — unmatched
//!   markers and unterminated fences degrade to literal text or a trailing
//!   code block rather than failing

mod block;
mod escape;
mod inline;

pub use block::{BlockState, ListKind, finish, render_markdown, step};
pub use escape::{escape_href, escape_html};
pub use inline::render_inline;
