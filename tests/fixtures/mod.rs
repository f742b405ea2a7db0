//! Test fixtures and mock implementations for integration testing

use async_trait::async_trait;
use rally_point::error::LeagueError;
use rally_point::store::players::{InMemoryPlayerStore, PlayerStore};
use rally_point::types::{Actor, GroupRole, Match, MatchType, Player, PlayerId, SystemRole};
use rally_point::utils::current_timestamp;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Initialize tracing output for tests (once per process)
pub fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Build a player with the given rating
pub fn player(id: &str, name: &str, rating: Option<f64>) -> Player {
    let mut p = Player::new(id.to_string(), name);
    p.rating = rating;
    p
}

/// Build an actor with a system role and group memberships
pub fn actor(id: &str, system_role: SystemRole, groups: &[(&str, GroupRole)]) -> Actor {
    Actor {
        id: id.to_string(),
        name: format!("User {}", id),
        email: Some(format!("{}@example.com", id)),
        system_role,
        memberships: groups
            .iter()
            .map(|(g, r)| (g.to_string(), *r))
            .collect::<HashMap<_, _>>(),
    }
}

/// Build a match submission without an id (assigned at creation)
pub fn submission(team_a: &[&str], team_b: &[&str], score_a: u32, score_b: u32) -> Match {
    Match {
        id: String::new(),
        date: current_timestamp(),
        match_type: if team_a.len() > 1 {
            MatchType::Doubles
        } else {
            MatchType::Singles
        },
        team_a: team_a.iter().map(|s| s.to_string()).collect(),
        team_b: team_b.iter().map(|s| s.to_string()).collect(),
        score_a,
        score_b,
        venue_id: None,
        notes: None,
        group_id: None,
        user_id: None,
    }
}

/// Player store wrapper that simulates a concurrent writer: the first
/// `save_all` is preceded by an out-of-band touch of one player, so the
/// delegated batch is stale and the inner store reports a version conflict.
pub struct ConflictingPlayerStore {
    inner: Arc<InMemoryPlayerStore>,
    conflict_target: PlayerId,
    save_all_calls: AtomicUsize,
}

impl ConflictingPlayerStore {
    pub fn new(inner: Arc<InMemoryPlayerStore>, conflict_target: &str) -> Self {
        Self {
            inner,
            conflict_target: conflict_target.to_string(),
            save_all_calls: AtomicUsize::new(0),
        }
    }

    pub fn save_all_calls(&self) -> usize {
        self.save_all_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlayerStore for ConflictingPlayerStore {
    async fn find_by_ids(&self, ids: &[PlayerId]) -> rally_point::error::Result<Vec<Player>> {
        self.inner.find_by_ids(ids).await
    }

    async fn find_by_email(&self, email: &str) -> rally_point::error::Result<Option<Player>> {
        self.inner.find_by_email(email).await
    }

    async fn find_all(&self) -> rally_point::error::Result<Vec<Player>> {
        self.inner.find_all().await
    }

    async fn save(&self, player: Player) -> rally_point::error::Result<Player> {
        self.inner.save(player).await
    }

    async fn save_all(&self, players: Vec<Player>) -> rally_point::error::Result<Vec<Player>> {
        let call = self.save_all_calls.fetch_add(1, Ordering::SeqCst);

        if call == 0 {
            // Interfering writer lands between the caller's read and save
            let current = self
                .inner
                .find_by_ids(&[self.conflict_target.clone()])
                .await?;
            if let Some(target) = current.into_iter().next() {
                self.inner.save(target).await?;
            }
        }

        self.inner.save_all(players).await
    }

    async fn delete(&self, player_id: &PlayerId) -> rally_point::error::Result<bool> {
        self.inner.delete(player_id).await
    }
}

/// Player store wrapper whose batch saves always fail, for exercising the
/// match-persisted-but-unrated path
pub struct FailingPlayerStore {
    inner: Arc<InMemoryPlayerStore>,
}

impl FailingPlayerStore {
    pub fn new(inner: Arc<InMemoryPlayerStore>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl PlayerStore for FailingPlayerStore {
    async fn find_by_ids(&self, ids: &[PlayerId]) -> rally_point::error::Result<Vec<Player>> {
        self.inner.find_by_ids(ids).await
    }

    async fn find_by_email(&self, email: &str) -> rally_point::error::Result<Option<Player>> {
        self.inner.find_by_email(email).await
    }

    async fn find_all(&self) -> rally_point::error::Result<Vec<Player>> {
        self.inner.find_all().await
    }

    async fn save(&self, player: Player) -> rally_point::error::Result<Player> {
        self.inner.save(player).await
    }

    async fn save_all(&self, _players: Vec<Player>) -> rally_point::error::Result<Vec<Player>> {
        Err(LeagueError::InternalError {
            message: "player store unavailable".to_string(),
        }
        .into())
    }

    async fn delete(&self, player_id: &PlayerId) -> rally_point::error::Result<bool> {
        self.inner.delete(player_id).await
    }
}
