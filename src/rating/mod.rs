//! Rating system built on a team-average Elo adjustment
//!
//! This module provides the pure rating calculations and the engine that
//! applies them to stored player records when a match is created.

pub mod elo;
pub mod engine;

// Re-export commonly used types
pub use elo::{TeamEloCalculator, TeamEloConfig};
pub use engine::{RatingEngine, RatingOutcome, SkipReason};
