//! Team-average Elo rating calculations
//!
//! This module provides the pure math behind the rating engine: team averages,
//! expected scores from the Elo curve (via the skillratings crate), and the
//! fixed-K delta applied to every member of a team.
//!
//! Both teams are collapsed to their average rating and every member receives
//! the identical delta, rather than weighting each player individually. This
//! matches the recorded rating history and must not be changed without
//! migrating it.

use serde::{Deserialize, Serialize};
use skillratings::elo::{expected_score, EloRating};

/// Configuration for the team Elo calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamEloConfig {
    /// Sensitivity constant controlling rating-swing magnitude per match
    pub k_factor: f64,
    /// Rating assumed for players with no rating recorded
    pub default_rating: f64,
}

impl Default for TeamEloConfig {
    fn default() -> Self {
        Self {
            k_factor: 32.0,
            default_rating: 1200.0,
        }
    }
}

impl TeamEloConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.k_factor.is_finite() || self.k_factor <= 0.0 {
            return Err(crate::error::LeagueError::ConfigurationError {
                message: "K-factor must be positive".to_string(),
            }
            .into());
        }

        if !self.default_rating.is_finite() || self.default_rating <= 0.0 {
            return Err(crate::error::LeagueError::ConfigurationError {
                message: "Default rating must be a positive number".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Team-average Elo calculator
#[derive(Debug, Clone)]
pub struct TeamEloCalculator {
    config: TeamEloConfig,
}

impl TeamEloCalculator {
    /// Create a new calculator with the given configuration
    pub fn new(config: TeamEloConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Rating assumed for players with no rating recorded
    pub fn default_rating(&self) -> f64 {
        self.config.default_rating
    }

    /// Arithmetic mean of a team's ratings, with unrated players read as the
    /// default. An empty team averages to the default rather than dividing
    /// by zero; callers skip empty rosters before getting here.
    pub fn team_average(&self, ratings: &[Option<f64>]) -> f64 {
        if ratings.is_empty() {
            return self.config.default_rating;
        }

        let sum: f64 = ratings
            .iter()
            .map(|r| r.unwrap_or(self.config.default_rating))
            .sum();

        sum / ratings.len() as f64
    }

    /// Expected scores for both teams from their average ratings. Each side
    /// is evaluated with the same Elo curve mirrored, so the pair sums to 1.0
    /// only up to floating-point rounding.
    pub fn expected_scores(&self, average_a: f64, average_b: f64) -> (f64, f64) {
        let team_a = EloRating { rating: average_a };
        let team_b = EloRating { rating: average_b };

        let (expected_a, _) = expected_score(&team_a, &team_b);
        let (expected_b, _) = expected_score(&team_b, &team_a);

        (expected_a, expected_b)
    }

    /// Signed rating delta for team A. Team B receives the negation.
    ///
    /// A tie counts as a team-A loss; historical ratings were computed this
    /// way and re-scoring ties as 0.5 would shift every trajectory recorded
    /// since.
    pub fn match_delta(&self, average_a: f64, average_b: f64, score_a: u32, score_b: u32) -> f64 {
        let (expected_a, _) = self.expected_scores(average_a, average_b);
        let actual_a = if score_a > score_b { 1.0 } else { 0.0 };

        self.config.k_factor * (actual_a - expected_a)
    }
}
