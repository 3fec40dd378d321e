//! # rust-cambia
//!
//! A rule engine for two-player Cambia, built for self-play search.
//!
//! ## Design Principles
//!
//! 1. **Cheap Clones**: Frames are `Copy` and the history window is an
//!    `im` persistent vector, so search can branch freely.
//!
//! 2. **Owned Randomness**: Every state carries its own seeded RNG. Hidden
//!    cards and draws are sampled from it, and `fork` derives independent
//!    deterministic streams.
//!
//! 3. **Validate, Then Mutate**: A rejected action leaves the state
//!    untouched.
//!
//! ## Modules
//!
//! - `core`: players, slots, hands, frames, state, actions, RNG, configuration, errors
//! - `cards`: card identifiers and their derived rank and score
//! - `effects`: special card effects and their slot selection
//! - `rules`: transition, valid moves, scoring, and the `RulesEngine` trait
//! - `views`: perspective canonicalization and redaction
//! - `nn`: tensor encoders for learner input
//! - `games`: the `CambiaGame` adapter the self-play driver talks to

pub mod core;
pub mod cards;
pub mod effects;
pub mod rules;
pub mod views;
pub mod nn;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerPair,
    GameRng, GameRngState,
    GameConfig,
    Action, ActionMask,
    Slot, Hand, Frame, GameState,
    CambiaError, Result,
};

pub use crate::cards::CardId;

pub use crate::effects::{CardEffect, EffectResolver, ResolveResult, SlotSelector};

pub use crate::rules::{RulesEngine, GameResult, EndReason, Transition};

pub use crate::views::{canonical, redact, observe, ObservedState};

pub use crate::nn::{BoardEncoder, BoardTensor, EncodedState, ObservationEncoder, StateEncoder};

pub use crate::games::{CambiaGame, CambiaGameBuilder};
