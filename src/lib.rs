//! Rally Point - match recording and skill rating core for recreational leagues
//!
//! This crate provides the rating engine, authorization rules, and
//! orchestration services behind a recreational-sports scheduling backend,
//! over pluggable player/match/venue storage.

pub mod auth;
pub mod config;
pub mod error;
pub mod rating;
pub mod service;
pub mod store;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{LeagueError, Result};
pub use types::*;

// Re-export key components
pub use rating::{RatingEngine, RatingOutcome, TeamEloCalculator};
pub use service::{MatchService, PlayerService, VenueService};
pub use store::{MatchStore, PlayerStore, VenueStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
