//! Player storage interface and implementations
//!
//! This module defines the interface for persisting and retrieving player
//! records. Batch saves are version-checked: every `Player` carries a version
//! that must match the stored record, so concurrent read-modify-write cycles
//! over overlapping rosters fail fast instead of silently losing updates.

use crate::error::LeagueError;
use crate::types::{Player, PlayerId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// Trait for player storage operations
#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// Get players by id. Order-independent; missing ids are silently
    /// omitted and duplicate ids collapse to one record.
    async fn find_by_ids(&self, ids: &[PlayerId]) -> crate::error::Result<Vec<Player>>;

    /// Get a player by email, if one exists
    async fn find_by_email(&self, email: &str) -> crate::error::Result<Option<Player>>;

    /// Get all players
    async fn find_all(&self) -> crate::error::Result<Vec<Player>>;

    /// Store or update a single player. Fails with `VersionConflict` if the
    /// stored record has moved past the given version.
    async fn save(&self, player: Player) -> crate::error::Result<Player>;

    /// Store multiple players as one unit. All versions are checked before
    /// any record is written; a single stale record fails the whole batch.
    async fn save_all(&self, players: Vec<Player>) -> crate::error::Result<Vec<Player>>;

    /// Remove a player record. Returns false if no such player exists.
    async fn delete(&self, player_id: &PlayerId) -> crate::error::Result<bool>;
}

/// In-memory player storage implementation
#[derive(Debug, Default)]
pub struct InMemoryPlayerStore {
    players: RwLock<HashMap<PlayerId, Player>>,
}

impl InMemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store directly, bypassing version checks. Test setup only.
    pub fn preset_players(&self, players: Vec<Player>) -> crate::error::Result<()> {
        let mut stored = self
            .players
            .write()
            .map_err(|_| LeagueError::InternalError {
                message: "Failed to acquire players write lock".to_string(),
            })?;

        for player in players {
            stored.insert(player.id.clone(), player);
        }
        Ok(())
    }

    fn check_version(
        stored: &HashMap<PlayerId, Player>,
        incoming: &Player,
    ) -> crate::error::Result<()> {
        if let Some(existing) = stored.get(&incoming.id) {
            if existing.version != incoming.version {
                return Err(LeagueError::VersionConflict {
                    player_id: incoming.id.clone(),
                }
                .into());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl PlayerStore for InMemoryPlayerStore {
    async fn find_by_ids(&self, ids: &[PlayerId]) -> crate::error::Result<Vec<Player>> {
        let players = self
            .players
            .read()
            .map_err(|_| LeagueError::InternalError {
                message: "Failed to acquire players read lock".to_string(),
            })?;

        let mut seen = std::collections::HashSet::new();
        let mut result = Vec::new();
        for id in ids {
            if seen.insert(id) {
                if let Some(player) = players.get(id) {
                    result.push(player.clone());
                }
            }
        }

        Ok(result)
    }

    async fn find_by_email(&self, email: &str) -> crate::error::Result<Option<Player>> {
        let players = self
            .players
            .read()
            .map_err(|_| LeagueError::InternalError {
                message: "Failed to acquire players read lock".to_string(),
            })?;

        Ok(players
            .values()
            .find(|p| p.email.as_deref() == Some(email))
            .cloned())
    }

    async fn find_all(&self) -> crate::error::Result<Vec<Player>> {
        let players = self
            .players
            .read()
            .map_err(|_| LeagueError::InternalError {
                message: "Failed to acquire players read lock".to_string(),
            })?;

        Ok(players.values().cloned().collect())
    }

    async fn save(&self, mut player: Player) -> crate::error::Result<Player> {
        let mut players = self
            .players
            .write()
            .map_err(|_| LeagueError::InternalError {
                message: "Failed to acquire players write lock".to_string(),
            })?;

        Self::check_version(&players, &player)?;
        player.version += 1;
        players.insert(player.id.clone(), player.clone());

        Ok(player)
    }

    async fn save_all(&self, mut batch: Vec<Player>) -> crate::error::Result<Vec<Player>> {
        let mut players = self
            .players
            .write()
            .map_err(|_| LeagueError::InternalError {
                message: "Failed to acquire players write lock".to_string(),
            })?;

        // Validate the whole batch before touching anything
        for player in &batch {
            Self::check_version(&players, player)?;
        }

        for player in &mut batch {
            player.version += 1;
            players.insert(player.id.clone(), player.clone());
        }

        Ok(batch)
    }

    async fn delete(&self, player_id: &PlayerId) -> crate::error::Result<bool> {
        let mut players = self
            .players
            .write()
            .map_err(|_| LeagueError::InternalError {
                message: "Failed to acquire players write lock".to_string(),
            })?;

        Ok(players.remove(player_id).is_some())
    }
}
