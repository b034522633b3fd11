//! # lifequest
//!
//! Core engine for a gamified "life OS" dashboard: Markdown note rendering
//! and XP progression.
//!
//! ## Features
//!
//! - Render a restricted Markdown dialect to sanitized HTML fragments
//! - Line-oriented block parsing (headings, lists, task items, quotes,
//!   code fences) with an explicit state machine
//! - Inline formatting (bold, italic, code, links, highlights, wikilinks)
//!   that never lets raw HTML through
//! - Pure XP → level/title progression with level-up detection
//!
//! ## Quick Start
//!
//! ```
//! use lifequest::{add_xp, compute_level, render_markdown, title_for_level};
//!
//! // Render a note preview
//! let html = render_markdown("# Today\n- [x] morning run\n- [ ] review PRs");
//! assert!(html.contains("<h1>Today</h1>"));
//!
//! // Derive level state from a cumulative XP total
//! let info = compute_level(2350);
//! assert_eq!(info.level, 3);
//! assert_eq!(info.current_xp, 350);
//! assert_eq!(title_for_level(info.level), "Petualang Pemula");
//!
//! // Apply a quest reward and check for a level-up
//! let gain = add_xp(2350, 700);
//! assert!(gain.leveled_up);
//! ```
//!
//! Both components are pure, synchronous, and total for their input domains:
//! they hold no shared state, perform no I/O, and are safe to call from any
//! number of call sites concurrently.

pub mod markdown;
pub mod progression;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use markdown::render_markdown;
pub use progression::{LevelInfo, XP_PER_LEVEL, XpGain, add_xp, compute_level, title_for_level};
