//! State encoding for neural network input.
//!
//! Both encoders lay a state out as `[frames, rows, channels]`: one frame
//! per history entry (current first), one row per slot (player one's five
//! slots, then player two's), and a one-hot over the 54 card identifiers
//! followed by knowledge bits. An empty slot has an all-zero one-hot.
//!
//! - `BoardEncoder`: full trainer-side state, two knowledge bits per slot,
//!   lossless (`decode` inverts `encode`)
//! - `ObservationEncoder`: the learner's view, canonicalized and redacted,
//!   one knowledge bit per slot

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CARD_ID_COUNT};
use crate::core::{
    CambiaError, Frame, GameRng, GameState, Player, Result, Slot, ACTION_COUNT, HISTORY_LEN,
    SLOTS_PER_PLAYER,
};
use crate::nn::traits::EncodedState;
use crate::views::{observe, ObservedState};

/// Slot rows per frame.
pub const BOARD_ROWS: usize = 2 * SLOTS_PER_PLAYER;

/// One-hot channels per slot.
pub const CARD_CHANNELS: usize = CARD_ID_COUNT as usize;

/// Channels per slot in the full board tensor.
pub const BOARD_CHANNELS: usize = CARD_CHANNELS + 2;

/// Channels per slot in the observation tensor.
pub const OBSERVATION_CHANNELS: usize = CARD_CHANNELS + 1;

/// Encodes game state into tensors for neural network input.
pub trait StateEncoder: Send + Sync {
    /// Encode the game state from a player's perspective.
    ///
    /// The encoding must hide information not visible to the player.
    fn encode(&self, state: &GameState, perspective: Player) -> EncodedState;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Get the total number of possible actions.
    fn action_space_size(&self) -> usize {
        ACTION_COUNT
    }
}

fn row(owner: Player, slot: usize) -> usize {
    owner.index() * SLOTS_PER_PLAYER + slot
}

fn cell_offset(frame: usize, row: usize, channels: usize) -> usize {
    (frame * BOARD_ROWS + row) * channels
}

/// Full board tensor plus the scalars that live outside the slot grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardTensor {
    /// `[HISTORY_LEN, BOARD_ROWS, BOARD_CHANNELS]` slot planes.
    pub planes: EncodedState,
    pub turn: u32,
    pub active_player: Player,
}

/// Lossless encoder for the trainer-side state.
///
/// Channel layout per slot: identifier one-hot (54), known to player one,
/// known to player two.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoardEncoder;

impl BoardEncoder {
    /// Shape of the slot planes.
    #[must_use]
    pub fn shape() -> Vec<usize> {
        vec![HISTORY_LEN, BOARD_ROWS, BOARD_CHANNELS]
    }

    /// Project a state onto the board tensor.
    #[must_use]
    pub fn encode(state: &GameState) -> BoardTensor {
        let mut planes = EncodedState::zeros(Self::shape());

        for (f, frame) in state.frames().enumerate() {
            for (owner, index, slot) in frame.slots() {
                let base = cell_offset(f, row(owner, index), BOARD_CHANNELS);
                if let Some(card) = slot.card {
                    planes.set(base + card.index(), 1.0);
                }
                for player in Player::ALL {
                    if slot.is_known_to(player) {
                        planes.set(base + CARD_CHANNELS + player.index(), 1.0);
                    }
                }
            }
        }

        BoardTensor {
            planes,
            turn: state.turn,
            active_player: state.active_player,
        }
    }

    /// Rebuild a state from a board tensor, attaching `rng`.
    ///
    /// Fails with `InvalidState` on a wrong shape, a non-binary value or a
    /// slot with more than one identifier set.
    pub fn decode(tensor: &BoardTensor, rng: GameRng) -> Result<GameState> {
        let shape = Self::shape();
        if tensor.planes.shape != shape || tensor.planes.len() != shape.iter().product::<usize>() {
            return Err(CambiaError::invalid_state(format!(
                "board tensor shape {:?}, expected {:?}",
                tensor.planes.shape, shape
            )));
        }

        let mut frames = [Frame::EMPTY; HISTORY_LEN];
        for (f, frame) in frames.iter_mut().enumerate() {
            for owner in Player::ALL {
                for index in 0..SLOTS_PER_PLAYER {
                    let base = cell_offset(f, row(owner, index), BOARD_CHANNELS);
                    let cell = &tensor.planes.tensor[base..base + BOARD_CHANNELS];
                    frame[owner][index] = decode_slot(cell)?;
                }
            }
        }

        GameState::from_frames(frames, tensor.turn, tensor.active_player, rng)
    }
}

fn read_bit(value: f32) -> Result<bool> {
    if value == 1.0 {
        Ok(true)
    } else if value == 0.0 {
        Ok(false)
    } else {
        Err(CambiaError::invalid_state(format!("non-binary tensor value {value}")))
    }
}

fn decode_slot(cell: &[f32]) -> Result<Slot> {
    let mut slot = Slot::EMPTY;
    for (id, &value) in cell[..CARD_CHANNELS].iter().enumerate() {
        if read_bit(value)? {
            if slot.card.is_some() {
                return Err(CambiaError::invalid_state("slot one-hot has several identifiers set"));
            }
            slot.card = Some(CardId::new(id as u8));
        }
    }
    for player in Player::ALL {
        slot.known[player] = read_bit(cell[CARD_CHANNELS + player.index()])?;
    }
    Ok(slot)
}

/// Encoder for the learner's view of the game.
///
/// The state is canonicalized so the perspective player sits in rows
/// `0..5`, then redacted. Channel layout per slot: identifier one-hot (54,
/// face-down cards set `CardId::UNKNOWN`), known to the viewer.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObservationEncoder;

impl ObservationEncoder {
    /// Create a new observation encoder.
    pub fn new() -> Self {
        Self
    }

    /// Encode an already redacted state.
    #[must_use]
    pub fn encode_observed(&self, observed: &ObservedState) -> EncodedState {
        let mut encoded = EncodedState::zeros(self.output_shape());

        for (f, frame) in observed.frames.iter().enumerate() {
            for (owner, slots) in frame.iter() {
                for (index, slot) in slots.iter().enumerate() {
                    let base = cell_offset(f, row(owner, index), OBSERVATION_CHANNELS);
                    if let Some(card) = slot.card {
                        encoded.set(base + card.index(), 1.0);
                    }
                    if slot.known {
                        encoded.set(base + CARD_CHANNELS, 1.0);
                    }
                }
            }
        }

        encoded
    }
}

impl StateEncoder for ObservationEncoder {
    fn encode(&self, state: &GameState, perspective: Player) -> EncodedState {
        self.encode_observed(&observe(state, perspective))
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![HISTORY_LEN, BOARD_ROWS, OBSERVATION_CHANNELS]
    }
}
