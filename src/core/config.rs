//! Game configuration.
//!
//! The board geometry (4 hand slots plus a draw slot, 4 history frames) is
//! fixed by the tensor interface. The termination rule is configurable.

use serde::{Deserialize, Serialize};

use super::error::{CambiaError, Result};
use super::state::HAND_SLOTS;

/// Cambia rule configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// A player whose hand scores at or below this value ends the game
    /// and wins (default: 1).
    pub stop_threshold: i32,

    /// Once the turn counter exceeds this value the lower score wins
    /// (default: 52).
    pub turn_limit: u32,

    /// Number of their own hand slots each player knows at deal time
    /// (default: 0).
    pub initial_peeks: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            stop_threshold: 1,
            turn_limit: 52,
            initial_peeks: 0,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the score threshold that ends the game.
    pub fn with_stop_threshold(mut self, threshold: i32) -> Self {
        self.stop_threshold = threshold;
        self
    }

    /// Set the turn limit.
    pub fn with_turn_limit(mut self, limit: u32) -> Self {
        self.turn_limit = limit;
        self
    }

    /// Set how many hand slots each player peeks at deal time.
    pub fn with_initial_peeks(mut self, peeks: usize) -> Self {
        self.initial_peeks = peeks;
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<()> {
        if self.initial_peeks > HAND_SLOTS {
            return Err(CambiaError::Config(format!(
                "initial_peeks must be at most {HAND_SLOTS}, got {}",
                self.initial_peeks
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.stop_threshold, 1);
        assert_eq!(config.turn_limit, 52);
        assert_eq!(config.initial_peeks, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new()
            .with_stop_threshold(5)
            .with_turn_limit(10)
            .with_initial_peeks(2);

        assert_eq!(config.stop_threshold, 5);
        assert_eq!(config.turn_limit, 10);
        assert_eq!(config.initial_peeks, 2);
    }

    #[test]
    fn test_validate_rejects_too_many_peeks() {
        let config = GameConfig::new().with_initial_peeks(5);
        assert!(matches!(config.validate(), Err(CambiaError::Config(_))));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_turn_limit(30);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
