//! Match storage interface and implementations
//!
//! Match creation goes through `insert`, an atomic check-or-insert keyed on
//! the match id, so a replayed submission cannot produce a second record.

use crate::error::LeagueError;
use crate::types::{Match, MatchId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// Outcome of a check-or-insert
#[derive(Debug, Clone)]
pub enum MatchInsert {
    /// The match was newly stored
    Inserted(Match),
    /// A match with this id already existed; the stored record is returned
    AlreadyExists(Match),
}

/// Trait for match storage operations
#[async_trait]
pub trait MatchStore: Send + Sync {
    /// Atomically store the match unless one with the same id exists
    async fn insert(&self, record: Match) -> crate::error::Result<MatchInsert>;

    /// Get a match by id
    async fn find_by_id(&self, match_id: &MatchId) -> crate::error::Result<Option<Match>>;

    /// Get all matches played at a venue
    async fn find_by_venue(&self, venue_id: &str) -> crate::error::Result<Vec<Match>>;

    /// Get all matches, newest first
    async fn find_all(&self) -> crate::error::Result<Vec<Match>>;

    /// Store or update a match unconditionally
    async fn save(&self, record: Match) -> crate::error::Result<Match>;

    /// Remove a match record. Returns false if no such match exists.
    async fn delete(&self, match_id: &MatchId) -> crate::error::Result<bool>;
}

/// In-memory match storage implementation
#[derive(Debug, Default)]
pub struct InMemoryMatchStore {
    matches: RwLock<HashMap<MatchId, Match>>,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MatchStore for InMemoryMatchStore {
    async fn insert(&self, record: Match) -> crate::error::Result<MatchInsert> {
        let mut matches = self
            .matches
            .write()
            .map_err(|_| LeagueError::InternalError {
                message: "Failed to acquire matches write lock".to_string(),
            })?;

        if let Some(existing) = matches.get(&record.id) {
            return Ok(MatchInsert::AlreadyExists(existing.clone()));
        }

        matches.insert(record.id.clone(), record.clone());
        Ok(MatchInsert::Inserted(record))
    }

    async fn find_by_id(&self, match_id: &MatchId) -> crate::error::Result<Option<Match>> {
        let matches = self
            .matches
            .read()
            .map_err(|_| LeagueError::InternalError {
                message: "Failed to acquire matches read lock".to_string(),
            })?;

        Ok(matches.get(match_id).cloned())
    }

    async fn find_by_venue(&self, venue_id: &str) -> crate::error::Result<Vec<Match>> {
        let matches = self
            .matches
            .read()
            .map_err(|_| LeagueError::InternalError {
                message: "Failed to acquire matches read lock".to_string(),
            })?;

        Ok(matches
            .values()
            .filter(|m| m.venue_id.as_deref() == Some(venue_id))
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> crate::error::Result<Vec<Match>> {
        let matches = self
            .matches
            .read()
            .map_err(|_| LeagueError::InternalError {
                message: "Failed to acquire matches read lock".to_string(),
            })?;

        let mut all: Vec<Match> = matches.values().cloned().collect();
        all.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(all)
    }

    async fn save(&self, record: Match) -> crate::error::Result<Match> {
        let mut matches = self
            .matches
            .write()
            .map_err(|_| LeagueError::InternalError {
                message: "Failed to acquire matches write lock".to_string(),
            })?;

        matches.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn delete(&self, match_id: &MatchId) -> crate::error::Result<bool> {
        let mut matches = self
            .matches
            .write()
            .map_err(|_| LeagueError::InternalError {
                message: "Failed to acquire matches write lock".to_string(),
            })?;

        Ok(matches.remove(match_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchType;
    use crate::utils::current_timestamp;
    use chrono::Duration;

    fn test_match(id: &str, venue_id: Option<&str>) -> Match {
        Match {
            id: id.to_string(),
            date: current_timestamp(),
            match_type: MatchType::Singles,
            team_a: vec!["p1".to_string()],
            team_b: vec!["p2".to_string()],
            score_a: 11,
            score_b: 5,
            venue_id: venue_id.map(str::to_string),
            notes: None,
            group_id: None,
            user_id: None,
        }
    }

    #[tokio::test]
    async fn test_insert_is_check_or_insert() {
        let store = InMemoryMatchStore::new();

        let first = store.insert(test_match("m1", None)).await.unwrap();
        assert!(matches!(first, MatchInsert::Inserted(_)));

        let mut replay = test_match("m1", None);
        replay.score_a = 99; // must not overwrite the stored record
        let second = store.insert(replay).await.unwrap();
        match second {
            MatchInsert::AlreadyExists(stored) => assert_eq!(stored.score_a, 11),
            MatchInsert::Inserted(_) => panic!("duplicate id was inserted"),
        }
    }

    #[tokio::test]
    async fn test_find_by_venue() {
        let store = InMemoryMatchStore::new();
        store.save(test_match("m1", Some("v1"))).await.unwrap();
        store.save(test_match("m2", Some("v2"))).await.unwrap();
        store.save(test_match("m3", Some("v1"))).await.unwrap();

        let at_v1 = store.find_by_venue("v1").await.unwrap();
        assert_eq!(at_v1.len(), 2);
    }

    #[tokio::test]
    async fn test_find_all_newest_first() {
        let store = InMemoryMatchStore::new();

        let mut older = test_match("m1", None);
        older.date = current_timestamp() - Duration::hours(2);
        let newer = test_match("m2", None);

        store.save(older).await.unwrap();
        store.save(newer).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all[0].id, "m2");
        assert_eq!(all[1].id, "m1");
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemoryMatchStore::new();
        store.save(test_match("m1", None)).await.unwrap();

        assert!(store.delete(&"m1".to_string()).await.unwrap());
        assert!(!store.delete(&"m1".to_string()).await.unwrap());
        assert!(store.find_by_id(&"m1".to_string()).await.unwrap().is_none());
    }
}
