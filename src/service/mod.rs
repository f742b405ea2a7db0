//! Orchestration services for the rally-point league
//!
//! Thin glue over the storage traits: authorization first, then mutation,
//! with the rating engine invoked exactly once per created match.

pub mod matches;
pub mod players;
pub mod venues;

// Re-export commonly used types
pub use matches::MatchService;
pub use players::{PlayerService, PlayerUpdate};
pub use venues::{VenueService, VenueUpdate};
