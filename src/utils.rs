//! Utility functions for the league service

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new unique match id
pub fn generate_match_id() -> String {
    Uuid::new_v4().to_string()
}

/// Generate a new unique player id
pub fn generate_player_id() -> String {
    Uuid::new_v4().to_string()
}

/// Generate a new unique venue id
pub fn generate_venue_id() -> String {
    Uuid::new_v4().to_string()
}

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_unique_ids() {
        let id1 = generate_match_id();
        let id2 = generate_match_id();
        assert_ne!(id1, id2);

        let player_id1 = generate_player_id();
        let player_id2 = generate_player_id();
        assert_ne!(player_id1, player_id2);

        let venue_id1 = generate_venue_id();
        let venue_id2 = generate_venue_id();
        assert_ne!(venue_id1, venue_id2);
    }

    #[test]
    fn test_ids_parse_as_uuids() {
        let id = generate_match_id();
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
