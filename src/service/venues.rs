//! Venue management
//!
//! Venues are ownership-sensitive: updates and deletes require the system
//! Admin role, the recorded creator, or GroupAdmin standing on the venue's
//! group. Deleting a venue re-points its matches at the `UNKNOWN` sentinel so
//! their history survives the venue.

use crate::auth::authorize_venue_mutation;
use crate::error::LeagueError;
use crate::store::matches::MatchStore;
use crate::store::venues::VenueStore;
use crate::types::{Actor, GroupId, Venue, UNKNOWN_VENUE};
use crate::utils::generate_venue_id;
use std::sync::Arc;
use tracing::info;

/// Fields a venue update may change
#[derive(Debug, Clone)]
pub struct VenueUpdate {
    pub name: String,
    pub location: Option<String>,
    pub court_count: u32,
}

/// Orchestrates venue creation, update, and deletion
pub struct VenueService {
    venues: Arc<dyn VenueStore>,
    matches: Arc<dyn MatchStore>,
}

impl VenueService {
    /// Create a new venue service
    pub fn new(venues: Arc<dyn VenueStore>, matches: Arc<dyn MatchStore>) -> Self {
        Self { venues, matches }
    }

    /// All registered venues
    pub async fn list_venues(&self) -> crate::error::Result<Vec<Venue>> {
        self.venues.find_all().await
    }

    /// Register a venue, stamping the creator and owning group
    pub async fn create_venue(
        &self,
        mut venue: Venue,
        actor: &Actor,
        group_id: Option<GroupId>,
    ) -> crate::error::Result<Venue> {
        if venue.id.is_empty() {
            venue.id = generate_venue_id();
        }
        venue.created_by = Some(actor.id.clone());
        venue.group_id = group_id;

        let saved = self.venues.save(venue).await?;
        info!("Venue {} created by user {}", saved.id, actor.id);
        Ok(saved)
    }

    /// Update a venue's details after an ownership check
    pub async fn update_venue(
        &self,
        venue_id: &str,
        update: VenueUpdate,
        actor: &Actor,
    ) -> crate::error::Result<Venue> {
        let mut existing = self
            .venues
            .find_by_id(&venue_id.to_string())
            .await?
            .ok_or_else(|| LeagueError::VenueNotFound {
                venue_id: venue_id.to_string(),
            })?;

        authorize_venue_mutation(actor, &existing)?;

        existing.name = update.name;
        existing.location = update.location;
        existing.court_count = update.court_count;

        self.venues.save(existing).await
    }

    /// Delete a venue after an ownership check, re-pointing its matches at
    /// the `UNKNOWN` sentinel first
    pub async fn delete_venue(&self, venue_id: &str, actor: &Actor) -> crate::error::Result<()> {
        let existing = self
            .venues
            .find_by_id(&venue_id.to_string())
            .await?
            .ok_or_else(|| LeagueError::VenueNotFound {
                venue_id: venue_id.to_string(),
            })?;

        authorize_venue_mutation(actor, &existing)?;

        let orphaned = self.matches.find_by_venue(venue_id).await?;
        let orphaned_count = orphaned.len();
        for mut record in orphaned {
            record.venue_id = Some(UNKNOWN_VENUE.to_string());
            self.matches.save(record).await?;
        }

        self.venues.delete(&existing.id).await?;
        info!(
            "Venue {} deleted by user {} ({} matches re-pointed)",
            existing.id, actor.id, orphaned_count
        );
        Ok(())
    }
}
