//! Game state: slots, hands, frames and the history window.
//!
//! ## Slot
//!
//! One card position plus a knowledge flag per player. `card == None` is the
//! empty representation (a discarded card or a cleared draw slot).
//!
//! ## Frame
//!
//! Both players' hands: 4 hand slots and 1 draw slot each.
//!
//! ## GameState
//!
//! The current frame, turn counter, active player, the three frames that
//! preceded the current one and the game's own RNG. The history is only
//! ever derived from the current frame by rolling it on each transition.

use im::Vector;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use super::error::{CambiaError, Result};
use super::player::{Player, PlayerPair};
use super::rng::GameRng;
use crate::cards::CardId;

/// Hand slots per player (indices `0..4`).
pub const HAND_SLOTS: usize = 4;

/// Index of the draw slot within a hand.
pub const DRAW_SLOT: usize = 4;

/// Slots per player, draw slot included.
pub const SLOTS_PER_PLAYER: usize = HAND_SLOTS + 1;

/// Frames in the history window, current frame included.
pub const HISTORY_LEN: usize = 4;

/// Slot indices of a hand, small enough to stay on the stack.
pub type SlotList = SmallVec<[usize; SLOTS_PER_PLAYER]>;

/// A single card position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Card in this slot, `None` when empty.
    pub card: Option<CardId>,

    /// Which players have seen the card.
    pub known: PlayerPair<bool>,
}

impl Slot {
    /// Empty slot, known to nobody.
    pub const EMPTY: Slot = Slot {
        card: None,
        known: PlayerPair::new(false, false),
    };

    /// A face-down card nobody has seen.
    #[must_use]
    pub const fn hidden(card: CardId) -> Self {
        Self {
            card: Some(card),
            known: PlayerPair::new(false, false),
        }
    }

    /// A card seen by exactly one player.
    #[must_use]
    pub fn seen_by(card: CardId, player: Player) -> Self {
        let mut slot = Self::hidden(card);
        slot.known[player] = true;
        slot
    }

    /// Whether the slot holds a card.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.card.is_some()
    }

    /// Whether `player` has seen the card in this slot.
    #[must_use]
    pub fn is_known_to(&self, player: Player) -> bool {
        self.known[player]
    }

    /// Remove the card and forget all knowledge of it.
    pub fn clear(&mut self) -> Option<CardId> {
        let card = self.card.take();
        self.known = PlayerPair::new(false, false);
        card
    }
}

/// One player's five slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    slots: [Slot; SLOTS_PER_PLAYER],
}

impl Hand {
    /// Hand with every slot empty.
    pub const EMPTY: Hand = Hand {
        slots: [Slot::EMPTY; SLOTS_PER_PLAYER],
    };

    /// Build a hand from four hand-slot cards and an optional draw.
    #[must_use]
    pub fn new(cards: [Slot; HAND_SLOTS], draw: Slot) -> Self {
        Self {
            slots: [cards[0], cards[1], cards[2], cards[3], draw],
        }
    }

    /// All five slots, draw slot last.
    #[must_use]
    pub fn slots(&self) -> &[Slot; SLOTS_PER_PLAYER] {
        &self.slots
    }

    /// All five slots, mutably.
    pub fn slots_mut(&mut self) -> &mut [Slot; SLOTS_PER_PLAYER] {
        &mut self.slots
    }

    /// The four hand slots, draw slot excluded.
    #[must_use]
    pub fn hand_slots(&self) -> &[Slot] {
        &self.slots[..HAND_SLOTS]
    }

    /// The draw slot.
    #[must_use]
    pub fn draw(&self) -> &Slot {
        &self.slots[DRAW_SLOT]
    }

    /// The draw slot, mutably.
    pub fn draw_mut(&mut self) -> &mut Slot {
        &mut self.slots[DRAW_SLOT]
    }

    /// Occupied hand slots whose card `viewer` has not seen.
    #[must_use]
    pub fn unknown_slots(&self, viewer: Player) -> SlotList {
        self.hand_slots()
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_occupied() && !slot.is_known_to(viewer))
            .map(|(i, _)| i)
            .collect()
    }

    /// Swap every slot's knowledge flags.
    pub fn swap_knowledge(&mut self) {
        for slot in &mut self.slots {
            slot.known.swap();
        }
    }
}

impl Index<usize> for Hand {
    type Output = Slot;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

impl IndexMut<usize> for Hand {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.slots[index]
    }
}

/// Both players' hands at one point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
    pub hands: PlayerPair<Hand>,
}

impl Frame {
    /// Frame with every slot empty.
    pub const EMPTY: Frame = Frame {
        hands: PlayerPair::new(Hand::EMPTY, Hand::EMPTY),
    };

    /// Create from both hands.
    #[must_use]
    pub const fn new(one: Hand, two: Hand) -> Self {
        Self {
            hands: PlayerPair::new(one, two),
        }
    }

    /// Exchange the hand blocks and every slot's knowledge flags.
    ///
    /// Applying this twice restores the original frame.
    pub fn swap_perspective(&mut self) {
        self.hands.swap();
        for (_, hand) in self.hands.iter_mut() {
            hand.swap_knowledge();
        }
    }

    /// Iterate over every slot of both hands as (owner, index, slot).
    pub fn slots(&self) -> impl Iterator<Item = (Player, usize, &Slot)> {
        self.hands
            .iter()
            .flat_map(|(owner, hand)| hand.slots().iter().enumerate().map(move |(i, s)| (owner, i, s)))
    }

    /// Check that every card identifier is in range.
    pub fn validate(&self) -> Result<()> {
        for (owner, index, slot) in self.slots() {
            if let Some(card) = slot.card {
                if !card.is_valid() {
                    return Err(CambiaError::invalid_state(format!(
                        "{owner} slot {index} holds out-of-range card id {}",
                        card.raw()
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Index<Player> for Frame {
    type Output = Hand;

    fn index(&self, player: Player) -> &Self::Output {
        &self.hands[player]
    }
}

impl IndexMut<Player> for Frame {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        &mut self.hands[player]
    }
}

/// Full game state.
///
/// Cloning is cheap: frames are `Copy` and the history window is an
/// `im::Vector`. A plain `clone` replays the same random stream; use
/// `fork` for an independent branch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current hands.
    frame: Frame,

    /// The frames preceding `frame`, newest first.
    history: Vector<Frame>,

    /// Completed transitions so far.
    pub turn: u32,

    /// Player to move.
    pub active_player: Player,

    /// Owned RNG for hidden-card resolution and draws.
    pub rng: GameRng,
}

impl GameState {
    /// Create a state from a current frame, with empty history.
    #[must_use]
    pub fn new(frame: Frame, active_player: Player, rng: GameRng) -> Self {
        Self {
            frame,
            history: std::iter::repeat(Frame::EMPTY).take(HISTORY_LEN - 1).collect(),
            turn: 0,
            active_player,
            rng,
        }
    }

    /// Rebuild a state from a full window of frames, newest first.
    pub fn from_frames(
        frames: [Frame; HISTORY_LEN],
        turn: u32,
        active_player: Player,
        rng: GameRng,
    ) -> Result<Self> {
        let state = Self {
            frame: frames[0],
            history: frames[1..].iter().copied().collect(),
            turn,
            active_player,
            rng,
        };
        state.validate()?;
        Ok(state)
    }

    /// Current frame.
    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Current frame, mutably.
    pub fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    /// A player's current hand.
    #[must_use]
    pub fn hand(&self, player: Player) -> &Hand {
        &self.frame[player]
    }

    /// A player's current hand, mutably.
    pub fn hand_mut(&mut self, player: Player) -> &mut Hand {
        &mut self.frame[player]
    }

    /// Borrow the current frame and the RNG at the same time.
    pub(crate) fn frame_and_rng_mut(&mut self) -> (&mut Frame, &mut GameRng) {
        (&mut self.frame, &mut self.rng)
    }

    /// Past frames, newest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Frame> {
        &self.history
    }

    /// The full window: current frame followed by past frames.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        std::iter::once(&self.frame).chain(self.history.iter())
    }

    /// Push the current frame into history, dropping the oldest frame.
    ///
    /// The current frame stays in place and becomes the frame the
    /// transition mutates.
    pub(crate) fn roll_history(&mut self) {
        self.history.push_front(self.frame);
        self.history.truncate(HISTORY_LEN - 1);
    }

    /// Replace the past frames, newest first.
    pub(crate) fn replace_history(&mut self, frames: impl IntoIterator<Item = Frame>) {
        self.history = frames.into_iter().take(HISTORY_LEN - 1).collect();
    }

    /// Check the state invariants.
    pub fn validate(&self) -> Result<()> {
        if self.history.len() != HISTORY_LEN - 1 {
            return Err(CambiaError::invalid_state(format!(
                "history holds {} frames, expected {}",
                self.history.len() + 1,
                HISTORY_LEN
            )));
        }
        for frame in self.frames() {
            frame.validate()?;
        }
        Ok(())
    }

    /// Clone into an independent branch with a forked RNG.
    ///
    /// Takes `&mut self` because forking the RNG advances the fork counter.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            frame: self.frame,
            history: self.history.clone(),
            turn: self.turn,
            active_player: self.active_player,
            rng: self.rng.fork(),
        }
    }

    /// Stable bytes of the logical state (frames, turn, active player).
    ///
    /// The RNG is excluded, so two states that only differ in their random
    /// stream share a key.
    pub fn state_key(&self) -> Result<Vec<u8>> {
        let key = bincode::serialize(&(&self.frame, &self.history, self.turn, self.active_player))?;
        Ok(key)
    }

    /// Hash of the logical state, RNG excluded.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.frame.hash(&mut hasher);
        self.history.hash(&mut hasher);
        self.turn.hash(&mut hasher);
        self.active_player.hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> Frame {
        let one = Hand::new(
            [
                Slot::hidden(CardId::new(0)),
                Slot::seen_by(CardId::new(5), Player::One),
                Slot::hidden(CardId::new(10)),
                Slot::EMPTY,
            ],
            Slot::seen_by(CardId::new(20), Player::One),
        );
        let two = Hand::new(
            [
                Slot::hidden(CardId::new(1)),
                Slot::hidden(CardId::new(2)),
                Slot::seen_by(CardId::new(3), Player::One),
                Slot::hidden(CardId::new(4)),
            ],
            Slot::EMPTY,
        );
        Frame::new(one, two)
    }

    #[test]
    fn test_slot_clear() {
        let mut slot = Slot::seen_by(CardId::new(7), Player::Two);
        assert_eq!(slot.clear(), Some(CardId::new(7)));
        assert_eq!(slot, Slot::EMPTY);
        assert_eq!(slot.clear(), None);
    }

    #[test]
    fn test_unknown_slots_skip_empty_and_known() {
        let frame = sample_frame();
        let unknown = frame[Player::One].unknown_slots(Player::One);
        assert_eq!(unknown.as_slice(), &[0, 2]);

        let unknown = frame[Player::Two].unknown_slots(Player::One);
        assert_eq!(unknown.as_slice(), &[0, 1, 3]);
    }

    #[test]
    fn test_swap_perspective_involution() {
        let frame = sample_frame();
        let mut swapped = frame;
        swapped.swap_perspective();

        assert_eq!(swapped[Player::Two][1].card, Some(CardId::new(5)));
        assert!(swapped[Player::Two][1].is_known_to(Player::Two));
        assert!(!swapped[Player::Two][1].is_known_to(Player::One));

        swapped.swap_perspective();
        assert_eq!(swapped, frame);
    }

    #[test]
    fn test_new_state_history_window() {
        let state = GameState::new(sample_frame(), Player::One, GameRng::new(1));

        assert_eq!(state.frames().count(), HISTORY_LEN);
        assert_eq!(state.turn, 0);
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_roll_history_keeps_length() {
        let mut state = GameState::new(sample_frame(), Player::One, GameRng::new(1));
        let before = *state.frame();

        for _ in 0..6 {
            state.roll_history();
            assert_eq!(state.frames().count(), HISTORY_LEN);
        }
        assert_eq!(state.history()[0], before);
    }

    #[test]
    fn test_validate_rejects_bad_card() {
        let mut state = GameState::new(sample_frame(), Player::One, GameRng::new(1));
        state.hand_mut(Player::Two)[0].card = Some(CardId::new(60));

        assert!(matches!(state.validate(), Err(CambiaError::InvalidState(_))));
    }

    #[test]
    fn test_validate_accepts_both_draw_slots_occupied() {
        // A swap fallback can leave a card in the other player's draw slot
        let mut state = GameState::new(sample_frame(), Player::One, GameRng::new(1));
        *state.hand_mut(Player::Two).draw_mut() = Slot::seen_by(CardId::new(9), Player::Two);

        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_state_key_ignores_rng() {
        let a = GameState::new(sample_frame(), Player::One, GameRng::new(1));
        let b = GameState::new(sample_frame(), Player::One, GameRng::new(2));

        assert_eq!(a.state_key().unwrap(), b.state_key().unwrap());
        assert_eq!(a.fingerprint(), b.fingerprint());

        let mut c = a.clone();
        c.turn += 1;
        assert_ne!(a.state_key().unwrap(), c.state_key().unwrap());
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn test_fork_keeps_logical_state() {
        let mut state = GameState::new(sample_frame(), Player::Two, GameRng::new(3));
        let forked = state.fork();

        assert_eq!(forked.frame(), state.frame());
        assert_eq!(forked.active_player, Player::Two);
        assert_ne!(forked.rng, state.rng);
    }

    #[test]
    fn test_state_serde_round_trip() {
        let state = GameState::new(sample_frame(), Player::One, GameRng::new(11));
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, restored);
    }
}
