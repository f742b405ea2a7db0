//! Rating system configuration

use serde::{Deserialize, Serialize};

/// Settings for the team Elo rating engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingSettings {
    /// Sensitivity constant controlling rating-swing magnitude per match
    pub k_factor: f64,
    /// Rating assumed for players with no rating recorded
    pub default_rating: f64,
    /// Attempts for the engine's read-modify-write before a version
    /// conflict is propagated
    pub max_save_attempts: u32,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            k_factor: 32.0,
            default_rating: 1200.0,
            max_save_attempts: 3,
        }
    }
}
