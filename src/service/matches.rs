//! Match orchestration
//!
//! `MatchService` ties match storage, the rating engine, and the
//! authorization rules together: a created match is persisted, rated exactly
//! once, and rendered with roster names resolved. Deletion removes the record
//! only; rating effects already applied stay in place.

use crate::auth::{authorize_match_mutation, MatchAction};
use crate::error::LeagueError;
use crate::rating::engine::{RatingEngine, RatingOutcome};
use crate::store::matches::{MatchInsert, MatchStore};
use crate::store::players::PlayerStore;
use crate::types::{Actor, Match, MatchResponse, PlayerId};
use crate::utils::generate_match_id;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Orchestrates match creation, deletion, and listing
pub struct MatchService {
    matches: Arc<dyn MatchStore>,
    players: Arc<dyn PlayerStore>,
    rating_engine: Arc<RatingEngine>,
}

impl MatchService {
    /// Create a new match service
    pub fn new(
        matches: Arc<dyn MatchStore>,
        players: Arc<dyn PlayerStore>,
        rating_engine: Arc<RatingEngine>,
    ) -> Self {
        Self {
            matches,
            players,
            rating_engine,
        }
    }

    /// Record a match and apply its rating update synchronously.
    ///
    /// A submission without an id gets a fresh one; a submission that carries
    /// an id is treated as an idempotency key, so replaying it returns the
    /// stored match without re-running the rating engine. If the rating
    /// update fails after the match was persisted, the gap is logged and
    /// surfaced as `RatingUpdateFailed` rather than hidden.
    pub async fn create_match(
        &self,
        mut submission: Match,
        actor: &Actor,
    ) -> crate::error::Result<MatchResponse> {
        authorize_match_mutation(actor, &submission, MatchAction::Create)?;

        if submission.id.is_empty() {
            submission.id = generate_match_id();
        }
        submission.user_id = Some(actor.id.clone());

        let saved = match self.matches.insert(submission).await? {
            MatchInsert::AlreadyExists(existing) => {
                info!(
                    "Match {} already recorded; returning stored record without re-rating",
                    existing.id
                );
                return self.to_response(existing).await;
            }
            MatchInsert::Inserted(saved) => saved,
        };

        match self.rating_engine.update_ratings(&saved).await {
            Ok(RatingOutcome::Applied { changes }) => {
                debug!(
                    "Match {} applied {} rating changes",
                    saved.id,
                    changes.len()
                );
            }
            Ok(RatingOutcome::Skipped { reason }) => {
                info!(
                    "Match {} recorded without rating update: {:?}",
                    saved.id, reason
                );
            }
            Err(err) => {
                error!(
                    "Match {} persisted but ratings were not applied: {}",
                    saved.id, err
                );
                return Err(LeagueError::RatingUpdateFailed {
                    match_id: saved.id,
                    message: err.to_string(),
                }
                .into());
            }
        }

        self.to_response(saved).await
    }

    /// Delete a match. Rating deltas already earned from it stay applied.
    pub async fn delete_match(&self, match_id: &str, actor: &Actor) -> crate::error::Result<()> {
        let record = self
            .matches
            .find_by_id(&match_id.to_string())
            .await?
            .ok_or_else(|| LeagueError::MatchNotFound {
                match_id: match_id.to_string(),
            })?;

        authorize_match_mutation(actor, &record, MatchAction::Delete)?;

        self.matches.delete(&record.id).await?;
        info!("Match {} deleted by user {}", record.id, actor.id);
        Ok(())
    }

    /// All recorded matches, newest first, with roster names resolved
    pub async fn list_matches(&self) -> crate::error::Result<Vec<MatchResponse>> {
        let records = self.matches.find_all().await?;

        let mut responses = Vec::with_capacity(records.len());
        for record in records {
            responses.push(self.to_response(record).await?);
        }
        Ok(responses)
    }

    /// Render a response with roster ids resolved to display names. An id
    /// with no matching player falls back to the raw id string; rendering
    /// never fails a request over an unresolved name.
    async fn to_response(&self, record: Match) -> crate::error::Result<MatchResponse> {
        let mut roster_ids: Vec<PlayerId> = record.team_a.clone();
        roster_ids.extend(record.team_b.iter().cloned());

        let id_to_name: HashMap<PlayerId, String> = self
            .players
            .find_by_ids(&roster_ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect();

        let resolve = |ids: &[PlayerId]| -> Vec<String> {
            ids.iter()
                .map(|id| id_to_name.get(id).cloned().unwrap_or_else(|| id.clone()))
                .collect()
        };

        let team_a_names = resolve(&record.team_a);
        let team_b_names = resolve(&record.team_b);

        Ok(MatchResponse {
            id: record.id,
            date: record.date,
            match_type: record.match_type,
            team_a_names,
            team_b_names,
            score_a: record.score_a,
            score_b: record.score_b,
            notes: record.notes,
            venue_id: record.venue_id,
            user_id: record.user_id,
            group_id: record.group_id,
        })
    }
}
