//! Error types for the league service
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific league scenarios
#[derive(Debug, thiserror::Error)]
pub enum LeagueError {
    #[error("Unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("Match not found: {match_id}")]
    MatchNotFound { match_id: String },

    #[error("Venue not found: {venue_id}")]
    VenueNotFound { venue_id: String },

    #[error("Player not found: {player_id}")]
    PlayerNotFound { player_id: String },

    #[error("A player with email {email} already exists")]
    DuplicateEmail { email: String },

    #[error("Stale player record: {player_id}")]
    VersionConflict { player_id: String },

    #[error("Ratings not applied for match {match_id}: {message}")]
    RatingUpdateFailed { match_id: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Internal service error: {message}")]
    InternalError { message: String },
}
