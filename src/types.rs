//! Common types used throughout the league service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for players
pub type PlayerId = String;

/// Unique identifier for authenticated users
pub type UserId = String;

/// Unique identifier for groups
pub type GroupId = String;

/// Unique identifier for matches
pub type MatchId = String;

/// Unique identifier for venues
pub type VenueId = String;

/// Venue id recorded on matches whose venue has been deleted
pub const UNKNOWN_VENUE: &str = "UNKNOWN";

/// System-wide role held by an authenticated user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemRole {
    Admin,
    User,
}

/// Per-group role, looked up by group id on a membership map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupRole {
    Member,
    GroupAdmin,
}

/// Format of a recorded match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchType {
    Singles,
    Doubles,
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchType::Singles => write!(f, "Singles"),
            MatchType::Doubles => write!(f, "Doubles"),
        }
    }
}

/// Authenticated caller performing a mutation
///
/// Built by the identity layer from a verified token; authorization predicates
/// read role and membership state from here and never from storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: UserId,
    pub name: String,
    pub email: Option<String>,
    pub system_role: SystemRole,
    pub memberships: HashMap<GroupId, GroupRole>,
}

impl Actor {
    pub fn is_system_admin(&self) -> bool {
        self.system_role == SystemRole::Admin
    }

    /// Role this actor holds in the given group, if any
    pub fn group_role(&self, group_id: &str) -> Option<GroupRole> {
        self.memberships.get(group_id).copied()
    }

    pub fn is_group_admin(&self, group_id: &str) -> bool {
        self.group_role(group_id) == Some(GroupRole::GroupAdmin)
    }
}

/// A registered player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub email: Option<String>,
    /// Authenticated account this player is linked to, if any
    pub user_id: Option<UserId>,
    pub joined_date: DateTime<Utc>,
    /// None until the player's first rated match; read as the configured
    /// default (1200.0) everywhere a rating is needed
    pub rating: Option<f64>,
    pub memberships: HashMap<GroupId, GroupRole>,
    /// Incremented on every save; checked by `PlayerStore::save_all`
    pub version: u64,
}

impl Player {
    /// Create a new unrated player record
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: None,
            user_id: None,
            joined_date: crate::utils::current_timestamp(),
            rating: None,
            memberships: HashMap::new(),
            version: 0,
        }
    }
}

/// A recorded match between two teams
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    /// Empty until assigned at submission; a caller-supplied id acts as an
    /// idempotency key for `MatchService::create_match`
    pub id: MatchId,
    pub date: DateTime<Utc>,
    pub match_type: MatchType,
    pub team_a: Vec<PlayerId>,
    pub team_b: Vec<PlayerId>,
    pub score_a: u32,
    pub score_b: u32,
    pub venue_id: Option<VenueId>,
    pub notes: Option<String>,
    pub group_id: Option<GroupId>,
    /// Creator, stamped at submission
    pub user_id: Option<UserId>,
}

/// A playing venue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    pub location: Option<String>,
    pub court_count: u32,
    pub created_by: Option<UserId>,
    pub group_id: Option<GroupId>,
}

/// Match representation returned to callers, with roster ids resolved to
/// display names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub id: MatchId,
    pub date: DateTime<Utc>,
    pub match_type: MatchType,
    pub team_a_names: Vec<String>,
    pub team_b_names: Vec<String>,
    pub score_a: u32,
    pub score_b: u32,
    pub notes: Option<String>,
    pub venue_id: Option<VenueId>,
    pub user_id: Option<UserId>,
    pub group_id: Option<GroupId>,
}

/// Rating change applied to one player by the rating engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingChange {
    pub player_id: PlayerId,
    pub old_rating: f64,
    pub new_rating: f64,
}

impl RatingChange {
    pub fn delta(&self) -> f64 {
        self.new_rating - self.old_rating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor_with(group_id: &str, role: GroupRole) -> Actor {
        let mut memberships = HashMap::new();
        memberships.insert(group_id.to_string(), role);
        Actor {
            id: "user-1".to_string(),
            name: "Test User".to_string(),
            email: None,
            system_role: SystemRole::User,
            memberships,
        }
    }

    #[test]
    fn test_actor_group_roles() {
        let actor = actor_with("group-1", GroupRole::GroupAdmin);

        assert!(actor.is_group_admin("group-1"));
        assert!(!actor.is_group_admin("group-2"));
        assert_eq!(actor.group_role("group-1"), Some(GroupRole::GroupAdmin));
        assert_eq!(actor.group_role("group-2"), None);
        assert!(!actor.is_system_admin());
    }

    #[test]
    fn test_member_is_not_group_admin() {
        let actor = actor_with("group-1", GroupRole::Member);
        assert!(!actor.is_group_admin("group-1"));
    }

    #[test]
    fn test_new_player_is_unrated() {
        let player = Player::new("p1".to_string(), "Alice");
        assert_eq!(player.rating, None);
        assert_eq!(player.version, 0);
        assert!(player.memberships.is_empty());
    }

    #[test]
    fn test_rating_change_delta() {
        let change = RatingChange {
            player_id: "p1".to_string(),
            old_rating: 1200.0,
            new_rating: 1216.0,
        };
        assert_eq!(change.delta(), 16.0);
    }
}
