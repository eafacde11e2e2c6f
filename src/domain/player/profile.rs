//! Profile entity - level, experience, stats and the reading gate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;
use crate::domain::progression::{
    xp_for_level, DerivedStats, LevelOutcome, LevelProgress,
};

use super::ReadingGate;

/// RPG stats of a profile. Every stat starts at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub strength: i32,
    pub endurance: i32,
    pub agility: i32,
    pub intellect: i32,
    pub wisdom: i32,
    pub focus: i32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            strength: 1,
            endurance: 1,
            agility: 1,
            intellect: 1,
            wisdom: 1,
            focus: 1,
        }
    }
}

impl Stats {
    /// Overwrites the counter-driven stats; agility and focus are untouched.
    pub fn apply(&mut self, derived: DerivedStats) {
        self.intellect = derived.intellect;
        self.wisdom = derived.wisdom;
        self.strength = derived.strength;
        self.endurance = derived.endurance;
    }
}

/// Game state of one user (1:1 with [`super::User`]).
///
/// # Invariants
///
/// - `level >= 1`
/// - `0 <= current_xp < xp_for_level(level)` after every XP gain
/// - `version` only increases, one step per committed change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    user_id: UserId,
    level: i32,
    current_xp: f64,
    stats: Stats,
    gate: ReadingGate,
    version: i64,
}

impl Profile {
    /// Creates the default profile handed out at sign-up.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            level: 1,
            current_xp: 0.0,
            stats: Stats::default(),
            gate: ReadingGate::Locked,
            version: 0,
        }
    }

    /// Reconstitute a profile from persistence (no validation).
    pub fn reconstitute(
        user_id: UserId,
        level: i32,
        current_xp: f64,
        stats: Stats,
        gate: ReadingGate,
        version: i64,
    ) -> Self {
        Self {
            user_id,
            level,
            current_xp,
            stats,
            gate,
            version,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn current_xp(&self) -> f64 {
        self.current_xp
    }

    /// Experience needed to finish the current level.
    pub fn xp_to_next_level(&self) -> f64 {
        xp_for_level(self.level)
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn gate(&self) -> ReadingGate {
        self.gate
    }

    pub fn is_reading_unlocked(&self) -> bool {
        self.gate.is_unlocked()
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    pub fn progress(&self) -> LevelProgress {
        LevelProgress::new(self.level, self.current_xp)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations (driven by the Player aggregate)
    // ─────────────────────────────────────────────────────────────────────────

    pub(crate) fn gain_xp(&mut self, xp: i64) -> LevelOutcome {
        let outcome = self.progress().gain(xp);
        self.level = outcome.progress.level;
        self.current_xp = outcome.progress.current_xp;
        outcome
    }

    pub(crate) fn set_gate(&mut self, gate: ReadingGate) {
        self.gate = gate;
    }

    pub(crate) fn apply_derived_stats(&mut self, derived: DerivedStats) {
        self.stats.apply(derived);
    }

    pub(crate) fn advance_version(&mut self) {
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_profile() -> Profile {
        Profile::new(UserId::new(5).unwrap())
    }

    #[test]
    fn new_profile_has_defaults() {
        let profile = test_profile();
        assert_eq!(profile.level(), 1);
        assert_eq!(profile.current_xp(), 0.0);
        assert_eq!(profile.stats(), &Stats::default());
        assert_eq!(profile.gate(), ReadingGate::Locked);
        assert_eq!(profile.version(), 0);
        assert_eq!(profile.xp_to_next_level(), 100.0);
    }

    #[test]
    fn gain_xp_rolls_over_levels() {
        let mut profile = test_profile();
        let outcome = profile.gain_xp(387);

        assert_eq!(outcome.levels_gained, 2);
        assert_eq!(profile.level(), 3);
        assert_eq!(profile.current_xp(), 5.0);
        assert_eq!(profile.xp_to_next_level(), 519.0);
    }

    #[test]
    fn derived_stats_leave_agility_and_focus_alone() {
        let mut profile = test_profile();
        profile.apply_derived_stats(DerivedStats {
            intellect: 4,
            wisdom: 2,
            strength: 3,
            endurance: 5,
        });

        let stats = profile.stats();
        assert_eq!(stats.intellect, 4);
        assert_eq!(stats.wisdom, 2);
        assert_eq!(stats.strength, 3);
        assert_eq!(stats.endurance, 5);
        assert_eq!(stats.agility, 1);
        assert_eq!(stats.focus, 1);
    }
}
