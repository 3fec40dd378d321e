//! Observability redaction.
//!
//! A redacted state keeps only the viewer's knowledge channel. Occupied
//! slots the viewer has not seen show `CardId::UNKNOWN` instead of their
//! identifier; empty slots stay empty.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{Frame, GameState, Player, PlayerPair, Slot, HISTORY_LEN, SLOTS_PER_PLAYER};

use super::perspective::canonical;

/// A slot as one viewer sees it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObservedSlot {
    /// Card identity if known, `CardId::UNKNOWN` if face down, `None` if
    /// the slot is empty.
    pub card: Option<CardId>,
    /// Whether the viewer knows the card.
    pub known: bool,
}

impl ObservedSlot {
    /// Redact one slot for `viewer`.
    #[must_use]
    pub fn observe(slot: &Slot, viewer: Player) -> Self {
        let known = slot.is_known_to(viewer);
        let card = slot.card.map(|card| if known { card } else { CardId::UNKNOWN });
        Self { card, known }
    }
}

/// Both hands of one frame as one viewer sees them.
pub type ObservedFrame = PlayerPair<[ObservedSlot; SLOTS_PER_PLAYER]>;

/// A game state restricted to what one viewer is entitled to see.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObservedState {
    /// Whose view this is.
    pub viewer: Player,
    /// Current frame first, then past frames.
    pub frames: [ObservedFrame; HISTORY_LEN],
    pub turn: u32,
    pub active_player: Player,
}

fn observe_frame(frame: &Frame, viewer: Player) -> ObservedFrame {
    PlayerPair::from_fn(|owner| {
        let slots = *frame[owner].slots();
        slots.map(|slot| ObservedSlot::observe(&slot, viewer))
    })
}

/// Project `state` onto what `viewer` knows.
#[must_use]
pub fn redact(state: &GameState, viewer: Player) -> ObservedState {
    let mut frames = [ObservedFrame::default(); HISTORY_LEN];
    for (out, frame) in frames.iter_mut().zip(state.frames()) {
        *out = observe_frame(frame, viewer);
    }
    ObservedState {
        viewer,
        frames,
        turn: state.turn,
        active_player: state.active_player,
    }
}

/// Learner input for `viewer`: canonicalized to seat one, then redacted.
#[must_use]
pub fn observe(state: &GameState, viewer: Player) -> ObservedState {
    let mut observed = redact(&canonical(state, viewer), Player::One);
    observed.viewer = viewer;
    observed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, Hand};

    fn sample_state() -> GameState {
        let one = Hand::new(
            [
                Slot::seen_by(CardId::new(1), Player::One),
                Slot::hidden(CardId::new(2)),
                Slot::seen_by(CardId::new(3), Player::Two),
                Slot::EMPTY,
            ],
            Slot::seen_by(CardId::new(40), Player::One),
        );
        let two = Hand::new([Slot::hidden(CardId::new(9)); 4], Slot::EMPTY);
        GameState::new(Frame::new(one, two), Player::One, GameRng::new(4))
    }

    #[test]
    fn test_redact_hides_unknown_cards() {
        let view = redact(&sample_state(), Player::One);
        let mine = view.frames[0][Player::One];

        assert_eq!(mine[0], ObservedSlot { card: Some(CardId::new(1)), known: true });
        assert_eq!(mine[1], ObservedSlot { card: Some(CardId::UNKNOWN), known: false });
        assert_eq!(mine[2], ObservedSlot { card: Some(CardId::UNKNOWN), known: false });
        assert_eq!(mine[3], ObservedSlot::default());
        assert_eq!(mine[4].card, Some(CardId::new(40)));
    }

    #[test]
    fn test_redact_for_opponent() {
        let view = redact(&sample_state(), Player::Two);
        let theirs = view.frames[0][Player::One];

        assert_eq!(theirs[0].card, Some(CardId::UNKNOWN));
        assert_eq!(theirs[2], ObservedSlot { card: Some(CardId::new(3)), known: true });
        assert_eq!(theirs[4].card, Some(CardId::UNKNOWN));
    }

    #[test]
    fn test_observe_puts_viewer_in_seat_one() {
        let view = observe(&sample_state(), Player::Two);

        assert_eq!(view.viewer, Player::Two);
        assert_eq!(view.active_player, Player::Two);
        // Player one's hand sits in seat two and only the 3 is visible
        assert_eq!(view.frames[0][Player::Two][2].card, Some(CardId::new(3)));
        assert_eq!(view.frames[0][Player::Two][0].card, Some(CardId::UNKNOWN));
    }
}
