//! Cambia rules.
//!
//! - `transition`: applies one action (effects, discard sweep, draws)
//! - `moves`: the valid-move oracle
//! - `scoring`: hand scores and termination
//! - `engine`: the `RulesEngine` trait the driver programs against

pub mod engine;
pub mod moves;
pub mod scoring;
pub mod transition;

pub use engine::RulesEngine;
pub use moves::valid_moves;
pub use scoring::{game_ended, game_result, hand_score, score, EndReason, GameResult};
pub use transition::{apply, discard_matching, Discards, Transition, TransitionRecord};
