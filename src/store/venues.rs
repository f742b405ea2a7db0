//! Venue storage interface and implementations

use crate::error::LeagueError;
use crate::types::{Venue, VenueId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// Trait for venue storage operations
#[async_trait]
pub trait VenueStore: Send + Sync {
    /// Get a venue by id
    async fn find_by_id(&self, venue_id: &VenueId) -> crate::error::Result<Option<Venue>>;

    /// Get all venues
    async fn find_all(&self) -> crate::error::Result<Vec<Venue>>;

    /// Store or update a venue
    async fn save(&self, venue: Venue) -> crate::error::Result<Venue>;

    /// Remove a venue. Returns false if no such venue exists.
    async fn delete(&self, venue_id: &VenueId) -> crate::error::Result<bool>;
}

/// In-memory venue storage implementation
#[derive(Debug, Default)]
pub struct InMemoryVenueStore {
    venues: RwLock<HashMap<VenueId, Venue>>,
}

impl InMemoryVenueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VenueStore for InMemoryVenueStore {
    async fn find_by_id(&self, venue_id: &VenueId) -> crate::error::Result<Option<Venue>> {
        let venues = self
            .venues
            .read()
            .map_err(|_| LeagueError::InternalError {
                message: "Failed to acquire venues read lock".to_string(),
            })?;

        Ok(venues.get(venue_id).cloned())
    }

    async fn find_all(&self) -> crate::error::Result<Vec<Venue>> {
        let venues = self
            .venues
            .read()
            .map_err(|_| LeagueError::InternalError {
                message: "Failed to acquire venues read lock".to_string(),
            })?;

        Ok(venues.values().cloned().collect())
    }

    async fn save(&self, venue: Venue) -> crate::error::Result<Venue> {
        let mut venues = self
            .venues
            .write()
            .map_err(|_| LeagueError::InternalError {
                message: "Failed to acquire venues write lock".to_string(),
            })?;

        venues.insert(venue.id.clone(), venue.clone());
        Ok(venue)
    }

    async fn delete(&self, venue_id: &VenueId) -> crate::error::Result<bool> {
        let mut venues = self
            .venues
            .write()
            .map_err(|_| LeagueError::InternalError {
                message: "Failed to acquire venues write lock".to_string(),
            })?;

        Ok(venues.remove(venue_id).is_some())
    }
}
