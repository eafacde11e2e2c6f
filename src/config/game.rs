//! Game configuration

use serde::Deserialize;

/// Game content settings
#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Install the default exercise catalog on startup
    #[serde(default = "default_seed_exercises")]
    pub seed_default_exercises: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed_default_exercises: default_seed_exercises(),
        }
    }
}

fn default_seed_exercises() -> bool {
    true
}
