//! Valid-move oracle.

use crate::core::{ActionMask, GameState, Player, ACTION_COUNT, HAND_SLOTS};

/// Legal actions for `player`.
///
/// A hand slot can be played while it holds a card. Playing the drawn card
/// is always legal, so the mask is never empty.
#[must_use]
pub fn valid_moves(state: &GameState, player: Player) -> ActionMask {
    let hand = state.hand(player);
    let mut mask = [false; ACTION_COUNT];
    for (i, slot) in hand.hand_slots().iter().enumerate() {
        mask[i] = slot.is_occupied();
    }
    mask[HAND_SLOTS] = true;
    ActionMask(mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::core::{Frame, GameRng, Hand, Slot};

    #[test]
    fn test_full_hand_all_legal() {
        let hand = Hand::new([Slot::hidden(CardId::new(3)); 4], Slot::seen_by(CardId::new(4), Player::One));
        let state = GameState::new(Frame::new(hand, Hand::EMPTY), Player::One, GameRng::new(0));

        assert_eq!(valid_moves(&state, Player::One).to_vec(), vec![1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_empty_slots_not_playable() {
        let mut hand = Hand::new([Slot::hidden(CardId::PLACEHOLDER); 4], Slot::EMPTY);
        hand[0] = Slot::EMPTY;
        hand[3] = Slot::EMPTY;
        let state = GameState::new(Frame::new(Hand::EMPTY, hand), Player::Two, GameRng::new(0));

        assert_eq!(valid_moves(&state, Player::Two).to_vec(), vec![0, 1, 1, 0, 1]);
    }

    #[test]
    fn test_never_empty() {
        let state = GameState::new(Frame::EMPTY, Player::One, GameRng::new(0));
        let mask = valid_moves(&state, Player::One);

        assert_eq!(mask.count(), 1);
        assert_eq!(mask.to_vec(), vec![0, 0, 0, 0, 1]);
    }
}
