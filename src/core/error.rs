//! Engine error taxonomy.
//!
//! Every engine failure is a local contract violation. The engine fails
//! fast and never repairs input: a caller that only submits actions taken
//! from the current valid-move mask never sees `InvalidAction`.

use thiserror::Error;

/// Errors produced by the Cambia engine.
#[derive(Debug, Error)]
pub enum CambiaError {
    /// Action index outside `0..5`, or a hand slot that holds no card.
    #[error("Invalid action {action}: {reason}")]
    InvalidAction { action: usize, reason: String },

    /// State data that violates the slot or turn invariants.
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Rejected game configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure while producing a state key.
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),
}

impl CambiaError {
    /// Shorthand for an `InvalidAction` error.
    pub(crate) fn invalid_action(action: usize, reason: impl Into<String>) -> Self {
        Self::InvalidAction {
            action,
            reason: reason.into(),
        }
    }

    /// Shorthand for an `InvalidState` error.
    pub(crate) fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState(reason.into())
    }
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, CambiaError>;
