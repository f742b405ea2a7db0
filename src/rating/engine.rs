//! Rating engine applying match outcomes to stored player ratings
//!
//! The engine performs one read-modify-write per match: batch-resolve both
//! rosters, compute a single team-average Elo delta, apply it with opposite
//! signs, and persist every touched player in one version-checked batch save.
//! A stale record fails the save and the whole cycle is re-run against fresh
//! reads, bounded by `max_save_attempts`.
//!
//! Applying the same match twice double-counts the rating change. Callers
//! guarantee at-most-once invocation per match; `MatchService` does so with
//! its check-or-insert idempotency key.

use crate::config::rating::RatingSettings;
use crate::error::LeagueError;
use crate::rating::elo::{TeamEloCalculator, TeamEloConfig};
use crate::store::players::PlayerStore;
use crate::types::{Match, Player, RatingChange};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Why a rating update was skipped without error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// One of the submitted rosters was empty
    EmptyRoster,
    /// No submitted id on one of the rosters resolved to a player record
    UnresolvedRoster,
}

/// Result of a rating update for one match
#[derive(Debug, Clone)]
pub enum RatingOutcome {
    /// Deltas were computed and persisted for every resolved player
    Applied { changes: Vec<RatingChange> },
    /// The match was left unrated; no player record was touched
    Skipped { reason: SkipReason },
}

/// The rating engine
pub struct RatingEngine {
    players: Arc<dyn PlayerStore>,
    calculator: TeamEloCalculator,
    max_save_attempts: u32,
}

impl RatingEngine {
    /// Create an engine with default rating settings
    pub fn new(players: Arc<dyn PlayerStore>) -> Self {
        Self::with_settings(players, &RatingSettings::default())
            .expect("Default rating settings must be valid")
    }

    /// Create an engine from explicit rating settings
    pub fn with_settings(
        players: Arc<dyn PlayerStore>,
        settings: &RatingSettings,
    ) -> crate::error::Result<Self> {
        if settings.max_save_attempts == 0 {
            return Err(LeagueError::ConfigurationError {
                message: "Max save attempts must be greater than 0".to_string(),
            }
            .into());
        }

        let calculator = TeamEloCalculator::new(TeamEloConfig {
            k_factor: settings.k_factor,
            default_rating: settings.default_rating,
        })?;

        Ok(Self {
            players,
            calculator,
            max_save_attempts: settings.max_save_attempts,
        })
    }

    /// Update every participating player's rating to reflect the match
    /// outcome.
    ///
    /// Incomplete rosters make this a no-op (`Skipped`), so matches that
    /// reference unknown or not-yet-registered player ids still succeed.
    /// Save failures other than a retried version conflict propagate to the
    /// caller; the match record itself is not this engine's concern.
    pub async fn update_ratings(&self, record: &Match) -> crate::error::Result<RatingOutcome> {
        if record.team_a.is_empty() || record.team_b.is_empty() {
            debug!(
                "Skipping rating update for match {}: empty roster",
                record.id
            );
            return Ok(RatingOutcome::Skipped {
                reason: SkipReason::EmptyRoster,
            });
        }

        let mut attempt = 1;
        loop {
            match self.try_update(record).await {
                Err(err) if attempt < self.max_save_attempts && is_version_conflict(&err) => {
                    warn!(
                        "Stale player record while rating match {} (attempt {}/{}), retrying",
                        record.id, attempt, self.max_save_attempts
                    );
                    attempt += 1;
                }
                other => return other,
            }
        }
    }

    /// One full read-modify-write cycle
    async fn try_update(&self, record: &Match) -> crate::error::Result<RatingOutcome> {
        let team_a = self.players.find_by_ids(&record.team_a).await?;
        let team_b = self.players.find_by_ids(&record.team_b).await?;

        if team_a.is_empty() || team_b.is_empty() {
            debug!(
                "Skipping rating update for match {}: no roster ids resolved",
                record.id
            );
            return Ok(RatingOutcome::Skipped {
                reason: SkipReason::UnresolvedRoster,
            });
        }

        let average_a = self.calculator.team_average(&ratings_of(&team_a));
        let average_b = self.calculator.team_average(&ratings_of(&team_b));
        let delta = self
            .calculator
            .match_delta(average_a, average_b, record.score_a, record.score_b);

        let mut changes = Vec::with_capacity(team_a.len() + team_b.len());
        let mut updated = Vec::with_capacity(team_a.len() + team_b.len());
        for player in team_a {
            updated.push(self.apply_delta(player, delta, &mut changes));
        }
        for player in team_b {
            updated.push(self.apply_delta(player, -delta, &mut changes));
        }

        self.players.save_all(updated).await?;

        info!(
            "Rated match {}: delta {:+.2} across {} players (averages {:.1} vs {:.1})",
            record.id,
            delta,
            changes.len(),
            average_a,
            average_b
        );

        Ok(RatingOutcome::Applied { changes })
    }

    fn apply_delta(
        &self,
        mut player: Player,
        delta: f64,
        changes: &mut Vec<RatingChange>,
    ) -> Player {
        let old_rating = player.rating.unwrap_or(self.calculator.default_rating());
        let new_rating = old_rating + delta;
        player.rating = Some(new_rating);

        changes.push(RatingChange {
            player_id: player.id.clone(),
            old_rating,
            new_rating,
        });

        player
    }
}

fn ratings_of(players: &[Player]) -> Vec<Option<f64>> {
    players.iter().map(|p| p.rating).collect()
}

fn is_version_conflict(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<LeagueError>(),
        Some(LeagueError::VersionConflict { .. })
    )
}
