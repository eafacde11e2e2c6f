//! Level-up resolution.
//!
//! Rolls surplus experience over into levels until the remaining XP sits
//! below the threshold of the current level.

use serde::{Deserialize, Serialize};

use super::formulas::xp_for_level;

/// Level and in-level experience of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelProgress {
    pub level: i32,
    pub current_xp: f64,
}

/// Result of resolving a [`LevelProgress`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelOutcome {
    pub progress: LevelProgress,
    pub levels_gained: u32,
}

impl LevelProgress {
    /// Creates progress, clamping level to at least 1 and XP to at least 0.
    pub fn new(level: i32, current_xp: f64) -> Self {
        let current_xp = if current_xp.is_finite() {
            current_xp.max(0.0)
        } else {
            0.0
        };
        Self {
            level: level.max(1),
            current_xp,
        }
    }

    /// Experience needed to finish the current level.
    pub fn threshold(&self) -> f64 {
        xp_for_level(self.level)
    }

    /// Adds experience and resolves any resulting level-ups.
    pub fn gain(self, xp: i64) -> LevelOutcome {
        Self::new(self.level, self.current_xp + xp.max(0) as f64).resolve()
    }

    /// Applies every pending level-up.
    ///
    /// Postcondition: `0 <= current_xp < xp_for_level(level)` for any XP an
    /// `i64` grant can produce. Thresholds grow as `level^1.5`, so even
    /// `i64::MAX` settles below level 10^7; only level `i32::MAX` stops early.
    pub fn resolve(self) -> LevelOutcome {
        let mut progress = Self::new(self.level, self.current_xp);
        let mut levels_gained = 0u32;

        while progress.current_xp >= progress.threshold() && progress.level < i32::MAX {
            let threshold = progress.threshold();
            debug_assert!(threshold > 0.0);
            progress.current_xp -= threshold;
            progress.level += 1;
            levels_gained = levels_gained.saturating_add(1);
        }

        if levels_gained > 1_000 {
            tracing::debug!(
                level = progress.level,
                levels_gained,
                "large level-up resolution"
            );
        }

        LevelOutcome {
            progress,
            levels_gained,
        }
    }

    /// Whether the in-level invariant currently holds.
    pub fn is_normalized(&self) -> bool {
        self.level >= 1 && self.current_xp >= 0.0 && self.current_xp < self.threshold()
    }
}
