//! Player directory management
//!
//! Registration, group membership, and profile updates. The rating engine is
//! the only writer of `Player::rating`; this service never touches it.

use crate::auth::require_group_admin;
use crate::error::LeagueError;
use crate::store::players::PlayerStore;
use crate::types::{Actor, GroupRole, Player};
use crate::utils::{current_timestamp, generate_player_id};
use std::sync::Arc;
use tracing::info;

/// Fields a profile update may change
#[derive(Debug, Clone)]
pub struct PlayerUpdate {
    pub name: String,
    /// Only a system Admin may change a player's email
    pub email: Option<String>,
}

/// Orchestrates player registration and membership management
pub struct PlayerService {
    players: Arc<dyn PlayerStore>,
}

impl PlayerService {
    /// Create a new player service
    pub fn new(players: Arc<dyn PlayerStore>) -> Self {
        Self { players }
    }

    /// All registered players
    pub async fn list_players(&self) -> crate::error::Result<Vec<Player>> {
        self.players.find_all().await
    }

    /// Register a player, optionally seeding a group membership.
    ///
    /// Emails are unique across the directory; registering into a group
    /// requires GroupAdmin standing there.
    pub async fn create_player(
        &self,
        mut player: Player,
        actor: &Actor,
        group: Option<(String, GroupRole)>,
    ) -> crate::error::Result<Player> {
        if let Some(email) = player.email.as_deref() {
            if self.players.find_by_email(email).await?.is_some() {
                return Err(LeagueError::DuplicateEmail {
                    email: email.to_string(),
                }
                .into());
            }
        }

        if let Some((group_id, role)) = group {
            require_group_admin(actor, &group_id)?;
            player.memberships.insert(group_id, role);
        }

        player.id = generate_player_id();
        player.joined_date = current_timestamp();
        player.version = 0;

        let saved = self.players.save(player).await?;
        info!("Player {} registered by user {}", saved.id, actor.id);
        Ok(saved)
    }

    /// Add a player to a group with the given role
    pub async fn add_to_group(
        &self,
        player_id: &str,
        group_id: &str,
        role: GroupRole,
        actor: &Actor,
    ) -> crate::error::Result<Player> {
        require_group_admin(actor, group_id)?;

        let mut player = self.find_required(player_id).await?;
        player.memberships.insert(group_id.to_string(), role);
        self.players.save(player).await
    }

    /// Remove a player's membership in a group
    pub async fn remove_from_group(
        &self,
        player_id: &str,
        group_id: &str,
        actor: &Actor,
    ) -> crate::error::Result<Player> {
        require_group_admin(actor, group_id)?;

        let mut player = self.find_required(player_id).await?;
        if player.memberships.remove(group_id).is_none() {
            return Ok(player);
        }
        self.players.save(player).await
    }

    /// Update a player's profile: the system Admin or the player's linked
    /// owner (matched by email) only. Email changes are Admin-only.
    pub async fn update_player(
        &self,
        player_id: &str,
        update: PlayerUpdate,
        actor: &Actor,
    ) -> crate::error::Result<Player> {
        let mut player = self.find_required(player_id).await?;

        let is_admin = actor.is_system_admin();
        let is_owner = match (player.email.as_deref(), actor.email.as_deref()) {
            (Some(player_email), Some(actor_email)) => {
                player_email.eq_ignore_ascii_case(actor_email)
            }
            _ => false,
        };

        if !is_admin && !is_owner {
            return Err(LeagueError::Unauthorized {
                reason: "You can only update your own player profile".to_string(),
            }
            .into());
        }

        player.name = update.name;
        if is_admin {
            if let Some(email) = update.email {
                player.email = Some(email);
            }
        }

        self.players.save(player).await
    }

    /// Delete a player record. Only the linked owner may delete their own
    /// record; ratings history on matches is untouched.
    pub async fn delete_player(&self, player_id: &str, actor: &Actor) -> crate::error::Result<()> {
        let player = self.find_required(player_id).await?;

        if player.user_id.as_deref() != Some(actor.id.as_str()) {
            return Err(LeagueError::Unauthorized {
                reason: "You can only delete your own player record".to_string(),
            }
            .into());
        }

        self.players.delete(&player.id).await?;
        info!("Player {} deleted by user {}", player_id, actor.id);
        Ok(())
    }

    async fn find_required(&self, player_id: &str) -> crate::error::Result<Player> {
        let found = self.players.find_by_ids(&[player_id.to_string()]).await?;
        found
            .into_iter()
            .next()
            .ok_or_else(|| {
                LeagueError::PlayerNotFound {
                    player_id: player_id.to_string(),
                }
                .into()
            })
    }
}
