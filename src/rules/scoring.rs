//! Scoring and termination.
//!
//! There is no explicit "Cambia" call: a hand at or below the stop
//! threshold ends the game immediately, and once the turn limit is passed
//! the lower hand wins. Player one is checked first, and a tie at the turn
//! limit goes to player two.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameState, Hand, Player};

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// The winner's hand reached the stop threshold.
    Stopped,
    /// The turn limit was passed and the winner held the lower hand.
    TurnLimit,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Player,
    pub reason: EndReason,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.winner == player
    }

    /// Result value from player one's side: `+1` or `-1`.
    #[must_use]
    pub fn value(&self) -> i8 {
        self.winner.sign()
    }

    /// Result value from `player`'s side: `+1` for a win, `-1` for a loss.
    #[must_use]
    pub fn value_for(&self, player: Player) -> i8 {
        if self.is_winner(player) {
            1
        } else {
            -1
        }
    }
}

/// Sum of card scores over the four hand slots. Empty slots count 0.
#[must_use]
pub fn hand_score(hand: &Hand) -> i32 {
    hand.hand_slots()
        .iter()
        .filter_map(|slot| slot.card)
        .map(|card| card.score())
        .sum()
}

/// A player's current score. The drawn card does not count.
#[must_use]
pub fn score(state: &GameState, player: Player) -> i32 {
    hand_score(state.hand(player))
}

/// Decide whether the game is over.
#[must_use]
pub fn game_result(state: &GameState, config: &GameConfig) -> Option<GameResult> {
    let one = score(state, Player::One);
    let two = score(state, Player::Two);

    let result = if one <= config.stop_threshold {
        Some(GameResult {
            winner: Player::One,
            reason: EndReason::Stopped,
        })
    } else if two <= config.stop_threshold {
        Some(GameResult {
            winner: Player::Two,
            reason: EndReason::Stopped,
        })
    } else if state.turn > config.turn_limit {
        let winner = if one < two { Player::One } else { Player::Two };
        Some(GameResult {
            winner,
            reason: EndReason::TurnLimit,
        })
    } else {
        None
    };

    if let Some(result) = result {
        debug!(
            "game over at turn {}: {} wins ({:?}, scores {one} / {two})",
            state.turn, result.winner, result.reason
        );
    }
    result
}

/// Game status from player one's side: `0` ongoing, `+1` / `-1` winner.
#[must_use]
pub fn game_ended(state: &GameState, config: &GameConfig) -> i8 {
    game_result(state, config).map_or(0, |r| r.value())
}
