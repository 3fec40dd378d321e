//! Perspective canonicalization.
//!
//! The learner always sees itself as player one. For player two the hand
//! blocks are exchanged in every frame, every slot's knowledge flags are
//! exchanged, and the active player is flipped.

use crate::core::{GameState, Player};

/// Exchange the two players' roles. Applying it twice is the identity.
#[must_use]
pub fn swap_perspective(state: &GameState) -> GameState {
    let frames: Vec<_> = state
        .frames()
        .map(|frame| {
            let mut frame = *frame;
            frame.swap_perspective();
            frame
        })
        .collect();

    let mut swapped = state.clone();
    *swapped.frame_mut() = frames[0];
    swapped.replace_history(frames[1..].iter().copied());
    swapped.active_player = state.active_player.opponent();
    swapped
}

/// State as seen from `viewer`'s seat: `viewer` occupies player one.
#[must_use]
pub fn canonical(state: &GameState, viewer: Player) -> GameState {
    match viewer {
        Player::One => state.clone(),
        Player::Two => swap_perspective(state),
    }
}
