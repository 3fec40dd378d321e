//! Turn transition.
//!
//! One call plays one card:
//!
//! 1. roll the history window
//! 2. work out which card was played (a hand card the player never looked
//!    at is resolved to a fresh random identity)
//! 3. resolve the played card's effect
//! 4. discard every other card of the same rank on the table
//! 5. deal the opponent their draw
//! 6. advance the turn and hand over to the opponent
//!
//! Everything that can fail is checked before the state is touched.

use log::trace;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::{Action, CambiaError, Frame, GameState, Player, Result, Slot, HAND_SLOTS};
use crate::effects::{CardEffect, EffectResolver, ResolveResult};

/// Slots cleared by the discard sweep, as (owner, slot index).
pub type Discards = SmallVec<[(Player, usize); 4]>;

/// What happened during one transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Player who acted.
    pub player: Player,
    /// Action taken.
    pub action: Action,
    /// Identity the played card resolved to.
    pub played: CardId,
    /// Whether `played` was the physical card (false when an unseen hand
    /// card was resolved at random).
    pub revealed: bool,
    /// Effect triggered by `played`.
    pub effect: CardEffect,
    /// How the effect resolved.
    pub resolution: ResolveResult,
    /// Slots cleared by the discard sweep.
    pub discarded: Discards,
    /// Player to move next.
    pub next_player: Player,
}

/// Summary of a transition suitable for logs and replays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub turn: u32,
    pub player: Player,
    pub action: Action,
    pub played: CardId,
}

impl Transition {
    /// Condense into a serializable record for the given turn.
    #[must_use]
    pub fn record(&self, turn: u32) -> TransitionRecord {
        TransitionRecord {
            turn,
            player: self.player,
            action: self.action,
            played: self.played,
        }
    }
}

/// Apply `action` for `player`, mutating `state` in place.
pub fn apply(state: &mut GameState, player: Player, action: Action) -> Result<Transition> {
    state.validate()?;
    if player != state.active_player {
        return Err(CambiaError::invalid_state(format!(
            "{player} acted but {} is active",
            state.active_player
        )));
    }

    let drawn = *state.hand(player).draw();
    let Some(drawn_card) = drawn.card else {
        return Err(CambiaError::invalid_state(format!("{player} has no drawn card")));
    };

    let hand_card = match action {
        Action::PlayHand(index) if index >= HAND_SLOTS => {
            return Err(CambiaError::invalid_action(index, "hand slot out of range"));
        }
        Action::PlayHand(index) => {
            let slot = state.hand(player)[index];
            match slot.card {
                Some(card) => Some((index, card, slot.is_known_to(player))),
                None => return Err(CambiaError::invalid_action(index, "hand slot is empty")),
            }
        }
        Action::PlayDrawn => None,
    };

    state.roll_history();
    let (frame, rng) = state.frame_and_rng_mut();
    let opponent = player.opponent();

    let (played, revealed) = match hand_card {
        Some((index, card, known)) => {
            let played = if known { card } else { rng.gen_card() };
            let hand = &mut frame[player];
            hand[index] = drawn;
            hand[index].known[opponent] = false;
            hand.draw_mut().clear();
            (played, known)
        }
        None => {
            frame[player].draw_mut().clear();
            (drawn_card, true)
        }
    };

    let effect = CardEffect::for_card(played);
    let resolution = EffectResolver::resolve(frame, effect, player, rng);
    let discarded = discard_matching(frame, played);

    let draw = rng.gen_card();
    *frame[opponent].draw_mut() = Slot::seen_by(draw, opponent);

    let transition = Transition {
        player,
        action,
        played,
        revealed,
        effect,
        resolution,
        discarded,
        next_player: opponent,
    };
    trace!(
        "{:?} (revealed: {revealed}), {effect}, discarded {:?}",
        transition.record(state.turn),
        transition.discarded.as_slice()
    );

    state.turn += 1;
    state.active_player = opponent;

    Ok(transition)
}

/// Clear every real, non-red-king card on the table with the played rank.
///
/// The played identity only contributes its rank, so a sentinel play
/// sweeps real cards of the rank it folds to.
pub fn discard_matching(frame: &mut Frame, played: CardId) -> Discards {
    let mut discarded = Discards::new();
    for player in Player::ALL {
        for (index, slot) in frame[player].slots_mut().iter_mut().enumerate() {
            let matches = slot
                .card
                .is_some_and(|c| c.is_real() && !c.is_red_king() && c.raw_rank() == played.raw_rank());
            if matches {
                slot.clear();
                discarded.push((player, index));
            }
        }
    }
    discarded
}
