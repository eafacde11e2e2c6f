//! Progression module - game mechanics math.
//!
//! - `formulas` - XP curve, rep targets, unity XP, stat derivation
//! - `level` - level-up resolution over `(level, current_xp)`

pub mod formulas;
pub mod level;

pub use formulas::{
    derive_stats, mind_effort, minimum_reps, recommended_reps, unity_xp, xp_for_level,
    DerivedStats,
};
pub use level::{LevelOutcome, LevelProgress};
