//! Role and ownership rules gating match, venue, and player mutation
//!
//! Authorization here is a set of pure predicates: the acting user's system
//! role and full membership map arrive on the `Actor` and the decision is made
//! fresh per call, with no storage access and no caching. A system Admin
//! passes every check without needing a membership entry.

use crate::error::LeagueError;
use crate::types::{Actor, Match, Venue};

/// Mutation being attempted on a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    Create,
    Delete,
}

/// Authorize a match mutation.
///
/// Creation is unrestricted for any authenticated actor; route-level policy
/// may restrict it further upstream. Deletion requires any one of: system
/// Admin, match creator, or GroupAdmin of the match's group.
pub fn authorize_match_mutation(
    actor: &Actor,
    record: &Match,
    action: MatchAction,
) -> crate::error::Result<()> {
    match action {
        MatchAction::Create => Ok(()),
        MatchAction::Delete => {
            if may_mutate_owned(actor, record.user_id.as_deref(), record.group_id.as_deref()) {
                Ok(())
            } else {
                Err(LeagueError::Unauthorized {
                    reason: "You cannot delete this match".to_string(),
                }
                .into())
            }
        }
    }
}

/// Authorize updating or deleting a venue: system Admin, venue creator, or
/// GroupAdmin of the venue's group.
pub fn authorize_venue_mutation(actor: &Actor, venue: &Venue) -> crate::error::Result<()> {
    if may_mutate_owned(actor, venue.created_by.as_deref(), venue.group_id.as_deref()) {
        Ok(())
    } else {
        Err(LeagueError::Unauthorized {
            reason: "You can only manage venues you created or manage as a Group Admin"
                .to_string(),
        }
        .into())
    }
}

/// Require GroupAdmin standing (or system Admin) for a group; gates group
/// membership management.
pub fn require_group_admin(actor: &Actor, group_id: &str) -> crate::error::Result<()> {
    if actor.is_system_admin() || actor.is_group_admin(group_id) {
        Ok(())
    } else {
        Err(LeagueError::Unauthorized {
            reason: "You must be a Group Admin to perform this action".to_string(),
        }
        .into())
    }
}

/// Shared rule for ownership-sensitive records: any one of system Admin,
/// recorded creator, or GroupAdmin of the record's group suffices.
fn may_mutate_owned(actor: &Actor, created_by: Option<&str>, group_id: Option<&str>) -> bool {
    actor.is_system_admin()
        || created_by.is_some_and(|id| id == actor.id)
        || group_id.is_some_and(|g| actor.is_group_admin(g))
}
