//! Rules engine trait.
//!
//! The self-play driver talks to the game through `RulesEngine`:
//! - What actions are legal
//! - How actions modify state
//! - Win/loss conditions

use crate::core::{Action, ActionMask, GameConfig, GameState, Player, Result};

use super::scoring::GameResult;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `valid_moves`: never returns an empty mask
/// - `apply_action`: validates before mutating; on error the state is
///   left untouched
/// - `is_terminal`: return None if the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Legal-action mask for a player.
    fn valid_moves(&self, state: &GameState, player: Player) -> ActionMask;

    /// Apply an action to the game state, returning the next player.
    fn apply_action(&self, state: &mut GameState, player: Player, action: Action) -> Result<Player>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Enumerate all legal actions for a player.
    fn legal_actions(&self, state: &GameState, player: Player) -> Vec<Action> {
        self.valid_moves(state, player).legal_actions().collect()
    }

    /// Apply an action to a copy of the state.
    ///
    /// The copy continues the original's random stream.
    fn successor(&self, state: &GameState, player: Player, action: Action) -> Result<(GameState, Player)> {
        let mut next = state.clone();
        let next_player = self.apply_action(&mut next, player, action)?;
        Ok((next, next_player))
    }
}
