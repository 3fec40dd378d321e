//! Card model.
//!
//! Cambia cards carry no data beyond their identifier. Everything the rules
//! need (rank, red-king status, score) is derived from it.

pub mod card;

pub use card::{CardId, CARD_ID_COUNT, REAL_CARD_COUNT, RED_KINGS};
