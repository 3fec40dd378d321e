//! Slot targeting for peek and swap effects.
//!
//! Effects aim at a card the acting player has not seen yet. When every
//! card in the target hand is already known, the target falls back to a
//! uniformly random slot index over the whole hand, draw slot included.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Hand, Player, SLOTS_PER_PLAYER};

/// A selected slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotTarget {
    /// Slot index in `0..5`.
    pub index: usize,
    /// True when no unseen card existed and the fallback picked the slot.
    pub fallback: bool,
}

/// Selects effect targets within one hand.
pub struct SlotSelector;

impl SlotSelector {
    /// Pick a slot of `hand` for an effect acting on behalf of `viewer`.
    ///
    /// Uniform over the occupied hand slots `viewer` has not seen; if there
    /// are none, uniform over all slot indices.
    pub fn select(hand: &Hand, viewer: Player, rng: &mut GameRng) -> SlotTarget {
        let unknown = hand.unknown_slots(viewer);
        match rng.choose(&unknown) {
            Some(&index) => SlotTarget {
                index,
                fallback: false,
            },
            None => SlotTarget {
                index: rng.gen_index(SLOTS_PER_PLAYER),
                fallback: true,
            },
        }
    }
}
