//! Core engine types: players, state, actions, RNG, configuration, errors.
//!
//! This module holds the data the rules operate on. The rules themselves
//! live in `rules` and `effects`.

pub mod error;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use error::{CambiaError, Result};
pub use player::{Player, PlayerPair};
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
pub use action::{Action, ActionMask, ACTION_COUNT};
pub use state::{
    Frame, GameState, Hand, Slot, SlotList, DRAW_SLOT, HAND_SLOTS, HISTORY_LEN, SLOTS_PER_PLAYER,
};
