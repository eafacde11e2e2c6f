//! Pure progression formulas.
//!
//! Every function here is deterministic and total over its input types:
//! out-of-domain values are clamped rather than rejected, so callers never
//! have to handle a failure from this module.

use serde::{Deserialize, Serialize};

/// Threshold returned by [`xp_for_level`] for levels below 1.
pub const FALLBACK_LEVEL_THRESHOLD: f64 = 100.0;

/// Baseline value of every derived stat.
pub const BASE_STAT: i32 = 1;

/// Mind effort needed per point of intellect.
pub const MIND_EFFORT_PER_INT: f64 = 1000.0;

/// Passed quizzes needed per point of wisdom.
pub const QUIZZES_PER_WIS: i64 = 20;

/// Body effort needed per point of strength.
pub const BODY_EFFORT_PER_STR: f64 = 1000.0;

/// Completed approaches needed per point of endurance.
pub const APPROACHES_PER_END: i64 = 50;

/// Share of the recommended reps a non-training set must reach.
pub const MINIMUM_REPS_RATIO: f64 = 0.3;

/// Recognized characters per point of mind effort.
pub const CHARS_PER_MIND_EFFORT: f64 = 10.0;

/// Experience required to complete `level`: `floor(100 * level^1.5)`.
pub fn xp_for_level(level: i32) -> f64 {
    if level < 1 {
        return FALLBACK_LEVEL_THRESHOLD;
    }
    (100.0 * f64::from(level).powf(1.5)).floor()
}

/// Target repetitions for one set: `floor(3 + level/5 + endurance/10)`.
pub fn recommended_reps(level: i32, endurance: i32) -> i64 {
    let level = f64::from(level.max(1));
    let endurance = f64::from(endurance.max(0));
    (3.0 + level / 5.0 + endurance / 10.0).floor() as i64
}

/// Smallest rep count accepted outside training mode.
pub fn minimum_reps(level: i32, endurance: i32) -> i64 {
    (recommended_reps(level, endurance) as f64 * MINIMUM_REPS_RATIO).floor() as i64
}

/// Experience awarded for a qualifying exercise set.
///
/// Stats at or below zero count as 1 so the multiplier never drops
/// below its baseline.
pub fn unity_xp(effort_body: f64, strength: i32, wisdom: i32) -> i64 {
    let strength = effective_stat(strength);
    let wisdom = effective_stat(wisdom);
    let multiplier = 1.0 + (f64::from(strength) + f64::from(wisdom)) / 200.0;
    (effort_body.max(0.0) * 3.0 * multiplier).floor() as i64
}

fn effective_stat(stat: i32) -> i32 {
    if stat <= 0 {
        1
    } else {
        stat
    }
}

/// Stats derived wholesale from the lifetime effort counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub intellect: i32,
    pub wisdom: i32,
    pub strength: i32,
    pub endurance: i32,
}

/// Recomputes the four counter-driven stats.
pub fn derive_stats(
    total_mind_effort: f64,
    total_body_effort: f64,
    quizzes_passed: i64,
    approaches_completed: i64,
) -> DerivedStats {
    DerivedStats {
        intellect: BASE_STAT + steps(total_mind_effort, MIND_EFFORT_PER_INT),
        wisdom: BASE_STAT + count_steps(quizzes_passed, QUIZZES_PER_WIS),
        strength: BASE_STAT + steps(total_body_effort, BODY_EFFORT_PER_STR),
        endurance: BASE_STAT + count_steps(approaches_completed, APPROACHES_PER_END),
    }
}

fn steps(total: f64, per_step: f64) -> i32 {
    let raw = (total.max(0.0) / per_step).floor();
    raw.min(f64::from(i32::MAX - BASE_STAT)) as i32
}

fn count_steps(total: i64, per_step: i64) -> i32 {
    let raw = total.max(0) / per_step;
    raw.min(i64::from(i32::MAX - BASE_STAT)) as i32
}

/// Mind effort earned from a recognized reading passage.
pub fn mind_effort(recognized_text: &str) -> f64 {
    recognized_text.chars().count() as f64 / CHARS_PER_MIND_EFFORT
}
