//! XP progression: level computation and titles.
//!
//! Levels are derived, never stored: the profile owns a single cumulative XP
//! counter and everything else (level, progress within the level, display
//! title) is a pure function of it. Thresholds are fixed-width — every level
//! takes [`XP_PER_LEVEL`] points, with no scaling.

/// XP required to advance one level. Fixed for all levels.
pub const XP_PER_LEVEL: u64 = 1000;

/// Sparse level → title table, sorted descending by threshold.
///
/// A level maps to the title of the greatest threshold at or below it.
const TITLES: &[(u64, &str)] = &[
    (100, "Raja Semesta"),
    (75, "Legenda Hidup"),
    (60, "Grandmaster Takdir"),
    (50, "Master Kehidupan"),
    (40, "Guru Kebiasaan"),
    (30, "Pendekar Fokus"),
    (20, "Ksatria Disiplin"),
    (10, "Pejuang Tangguh"),
    (5, "Penjelajah Muda"),
    (1, "Petualang Pemula"),
];

/// Level state derived from a cumulative XP total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct LevelInfo {
    /// Current level, always >= 1.
    pub level: u64,
    /// Progress within the current level, in `0..XP_PER_LEVEL`.
    pub current_xp: u64,
    /// XP needed to fill a level. Constant width.
    pub xp_for_next_level: u64,
}

/// Result of applying an XP gain to a profile total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct XpGain {
    /// New cumulative total after the gain.
    pub total_xp: u64,
    /// Level state derived from the new total.
    pub info: LevelInfo,
    /// Title for the new level.
    pub title: &'static str,
    /// Whether the gain crossed at least one level boundary. The caller
    /// decides what to do with this (e.g. fire a level-up notification).
    pub leveled_up: bool,
    /// How many level boundaries the gain crossed.
    pub levels_gained: u64,
}

/// Compute level state from a cumulative XP total.
///
/// The input is unsigned, so negative totals are unrepresentable; callers
/// holding signed values must clamp to zero before calling.
///
/// # Examples
///
/// ```
/// use lifequest::compute_level;
///
/// let info = compute_level(0);
/// assert_eq!(info.level, 1);
/// assert_eq!(info.current_xp, 0);
///
/// let info = compute_level(2350);
/// assert_eq!(info.level, 3);
/// assert_eq!(info.current_xp, 350);
/// assert_eq!(info.xp_for_next_level, 1000);
/// ```
pub fn compute_level(total_xp: u64) -> LevelInfo {
    LevelInfo {
        level: total_xp / XP_PER_LEVEL + 1,
        current_xp: total_xp % XP_PER_LEVEL,
        xp_for_next_level: XP_PER_LEVEL,
    }
}

/// Look up the display title for a level.
///
/// Returns the title of the greatest threshold at or below `level`. Levels
/// below the lowest threshold (only level 0, which no derived level can be)
/// fall back to the lowest threshold's title, so the lookup is total.
///
/// # Examples
///
/// ```
/// use lifequest::title_for_level;
///
/// assert_eq!(title_for_level(1), "Petualang Pemula");
/// assert_eq!(title_for_level(55), "Master Kehidupan");
/// assert_eq!(title_for_level(150), "Raja Semesta");
/// ```
pub fn title_for_level(level: u64) -> &'static str {
    for &(threshold, title) in TITLES {
        if level >= threshold {
            return title;
        }
    }
    TITLES[TITLES.len() - 1].1
}

/// Apply an XP gain to a cumulative total and re-derive level state.
///
/// The new total saturates instead of wrapping; XP is monotonically
/// non-decreasing by contract and a wrap would break that.
///
/// # Examples
///
/// ```
/// use lifequest::add_xp;
///
/// let gain = add_xp(950, 100);
/// assert_eq!(gain.total_xp, 1050);
/// assert_eq!(gain.info.level, 2);
/// assert!(gain.leveled_up);
/// ```
pub fn add_xp(total_xp: u64, delta: u64) -> XpGain {
    let before = compute_level(total_xp);
    let new_total = total_xp.saturating_add(delta);
    let info = compute_level(new_total);
    XpGain {
        total_xp: new_total,
        info,
        title: title_for_level(info.level),
        leveled_up: info.level > before.level,
        levels_gained: info.level - before.level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_xp() {
        let info = compute_level(0);
        assert_eq!(info.level, 1);
        assert_eq!(info.current_xp, 0);
        assert_eq!(info.xp_for_next_level, XP_PER_LEVEL);
    }

    #[test]
    fn test_level_boundary() {
        assert_eq!(compute_level(999).level, 1);
        assert_eq!(compute_level(999).current_xp, 999);
        assert_eq!(compute_level(1000).level, 2);
        assert_eq!(compute_level(1000).current_xp, 0);
        assert_eq!(compute_level(1001).level, 2);
        assert_eq!(compute_level(1001).current_xp, 1);
    }

    #[test]
    fn test_title_thresholds() {
        assert_eq!(title_for_level(1), "Petualang Pemula");
        assert_eq!(title_for_level(4), "Petualang Pemula");
        assert_eq!(title_for_level(5), "Penjelajah Muda");
        assert_eq!(title_for_level(50), "Master Kehidupan");
        // Between thresholds 50 and 60, resolves down
        assert_eq!(title_for_level(55), "Master Kehidupan");
        assert_eq!(title_for_level(60), "Grandmaster Takdir");
        // Above the highest threshold, resolves to the highest
        assert_eq!(title_for_level(100), "Raja Semesta");
        assert_eq!(title_for_level(150), "Raja Semesta");
    }

    #[test]
    fn test_title_below_lowest_threshold() {
        // Level 0 can't be derived from XP, but the lookup is total anyway
        assert_eq!(title_for_level(0), "Petualang Pemula");
    }

    #[test]
    fn test_add_xp_no_level_up() {
        let gain = add_xp(100, 200);
        assert_eq!(gain.total_xp, 300);
        assert_eq!(gain.info.level, 1);
        assert!(!gain.leveled_up);
        assert_eq!(gain.levels_gained, 0);
    }

    #[test]
    fn test_add_xp_single_level_up() {
        let gain = add_xp(950, 100);
        assert_eq!(gain.total_xp, 1050);
        assert_eq!(gain.info.level, 2);
        assert_eq!(gain.info.current_xp, 50);
        assert!(gain.leveled_up);
        assert_eq!(gain.levels_gained, 1);
    }

    #[test]
    fn test_add_xp_multiple_level_ups() {
        let gain = add_xp(0, 3500);
        assert_eq!(gain.info.level, 4);
        assert!(gain.leveled_up);
        assert_eq!(gain.levels_gained, 3);
        assert_eq!(gain.title, "Petualang Pemula");
    }

    #[test]
    fn test_add_xp_exact_boundary() {
        let gain = add_xp(0, 1000);
        assert_eq!(gain.info.level, 2);
        assert_eq!(gain.info.current_xp, 0);
        assert!(gain.leveled_up);
    }

    #[test]
    fn test_add_xp_saturates() {
        let gain = add_xp(u64::MAX, 1);
        assert_eq!(gain.total_xp, u64::MAX);
        assert!(!gain.leveled_up);
    }

    #[test]
    fn test_title_tracks_level() {
        let gain = add_xp(49_000, 1000);
        assert_eq!(gain.info.level, 51);
        assert_eq!(gain.title, "Master Kehidupan");
    }

    proptest! {
        #[test]
        fn prop_level_formula(t in any::<u64>()) {
            let info = compute_level(t);
            prop_assert_eq!(info.level, t / XP_PER_LEVEL + 1);
            prop_assert_eq!(info.current_xp, t % XP_PER_LEVEL);
            prop_assert_eq!(info.xp_for_next_level, XP_PER_LEVEL);
        }

        #[test]
        fn prop_current_xp_in_range(t in any::<u64>()) {
            let info = compute_level(t);
            prop_assert!(info.current_xp < XP_PER_LEVEL);
            prop_assert!(info.level >= 1);
        }

        #[test]
        fn prop_title_is_total(level in any::<u64>()) {
            let title = title_for_level(level);
            prop_assert!(TITLES.iter().any(|&(_, t)| t == title));
        }

        #[test]
        fn prop_add_xp_monotonic(t in 0u64..1_000_000, d in 0u64..1_000_000) {
            let gain = add_xp(t, d);
            prop_assert!(gain.total_xp >= t);
            prop_assert!(gain.info.level >= compute_level(t).level);
            prop_assert_eq!(gain.leveled_up, gain.levels_gained > 0);
        }
    }
}
