//! WASM bindings for the browser dashboard.
//!
//! This module exposes the renderer and progression calculator to
//! JavaScript via wasm-bindgen. Both are total functions, so the bindings
//! return values directly rather than `Result`s.

use wasm_bindgen::prelude::*;

use crate::progression;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Render a Markdown note to an HTML fragment.
#[wasm_bindgen(js_name = renderMarkdown)]
pub fn render_markdown(source: &str) -> String {
    crate::markdown::render_markdown(source)
}

/// Level state derived from a cumulative XP total.
#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct LevelSnapshot {
    pub level: u64,
    #[wasm_bindgen(js_name = currentXp)]
    pub current_xp: u64,
    #[wasm_bindgen(js_name = xpForNextLevel)]
    pub xp_for_next_level: u64,
}

/// Compute level state from a cumulative XP total.
#[wasm_bindgen(js_name = computeLevel)]
pub fn compute_level(total_xp: u64) -> LevelSnapshot {
    let info = progression::compute_level(total_xp);
    LevelSnapshot {
        level: info.level,
        current_xp: info.current_xp,
        xp_for_next_level: info.xp_for_next_level,
    }
}

/// Look up the display title for a level.
#[wasm_bindgen(js_name = titleForLevel)]
pub fn title_for_level(level: u64) -> String {
    progression::title_for_level(level).to_string()
}

/// Result of applying an XP gain.
#[wasm_bindgen]
pub struct GainSnapshot {
    #[wasm_bindgen(js_name = totalXp)]
    pub total_xp: u64,
    pub level: u64,
    #[wasm_bindgen(js_name = currentXp)]
    pub current_xp: u64,
    #[wasm_bindgen(getter_with_clone)]
    pub title: String,
    #[wasm_bindgen(js_name = leveledUp)]
    pub leveled_up: bool,
}

/// Apply an XP gain and report the new level state plus whether a level
/// boundary was crossed (the app fires its notification off this flag).
#[wasm_bindgen(js_name = addXp)]
pub fn add_xp(total_xp: u64, delta: u64) -> GainSnapshot {
    let gain = progression::add_xp(total_xp, delta);
    GainSnapshot {
        total_xp: gain.total_xp,
        level: gain.info.level,
        current_xp: gain.info.current_xp,
        title: gain.title.to_string(),
        leveled_up: gain.leveled_up,
    }
}
