//! Action representation.
//!
//! A Cambia turn is a single choice: discard one of the four hand cards
//! (replacing it with the drawn card) or discard the drawn card itself.
//! The driver speaks in action indices `0..5`; the engine converts them to
//! `Action` at the boundary.

use serde::{Deserialize, Serialize};

use super::error::{CambiaError, Result};
use super::state::{DRAW_SLOT, HAND_SLOTS};

/// Size of the action space.
pub const ACTION_COUNT: usize = HAND_SLOTS + 1;

/// A complete game action.
///
/// ## Example
///
/// ```
/// use rust_cambia::core::Action;
///
/// assert_eq!(Action::from_index(2).unwrap(), Action::PlayHand(2));
/// assert_eq!(Action::from_index(4).unwrap(), Action::PlayDrawn);
/// assert!(Action::from_index(5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play the card in hand slot `0..4`, keeping the drawn card in its place.
    PlayHand(usize),
    /// Play the drawn card.
    PlayDrawn,
}

impl Action {
    /// Convert a driver action index.
    pub fn from_index(index: usize) -> Result<Self> {
        match index {
            i if i < HAND_SLOTS => Ok(Action::PlayHand(i)),
            DRAW_SLOT => Ok(Action::PlayDrawn),
            other => Err(CambiaError::invalid_action(
                other,
                format!("action must be in 0..{ACTION_COUNT}"),
            )),
        }
    }

    /// Get the driver action index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Action::PlayHand(slot) => slot,
            Action::PlayDrawn => DRAW_SLOT,
        }
    }

    /// Iterate over the whole action space.
    pub fn all() -> impl Iterator<Item = Action> {
        (0..HAND_SLOTS).map(Action::PlayHand).chain(std::iter::once(Action::PlayDrawn))
    }
}

impl TryFrom<usize> for Action {
    type Error = CambiaError;

    fn try_from(index: usize) -> Result<Self> {
        Action::from_index(index)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::PlayHand(slot) => write!(f, "play hand slot {slot}"),
            Action::PlayDrawn => write!(f, "play drawn card"),
        }
    }
}

/// Legal-action mask over the action space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionMask(pub [bool; ACTION_COUNT]);

impl ActionMask {
    /// Whether an action is legal.
    #[must_use]
    pub fn is_legal(&self, action: Action) -> bool {
        self.0[action.index()]
    }

    /// Legal actions in index order.
    pub fn legal_actions(&self) -> impl Iterator<Item = Action> + '_ {
        Action::all().filter(|a| self.is_legal(*a))
    }

    /// Number of legal actions.
    #[must_use]
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&b| b).count()
    }

    /// Mask as 0/1 values, the form the self-play driver consumes.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.iter().map(|&b| u8::from(b)).collect()
    }
}
