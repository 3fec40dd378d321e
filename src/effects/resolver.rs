//! Effect resolution - executing card effects on a frame.
//!
//! Resolution only touches knowledge flags (peeks) or exchanges whole
//! slots between the two hands (swaps). A fallback target can be any of the
//! five slots, draw slot included, and the swap goes through either way.

use log::trace;

use crate::core::{Frame, GameRng, Player};

use super::effect::CardEffect;
use super::targeting::SlotSelector;

/// Result of resolving an effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveResult {
    /// The actor now knows the card in `owner`'s `slot`.
    Peeked { owner: Player, slot: usize },
    /// The actor's slot `own` and the opponent's slot `opponent` were
    /// exchanged.
    Swapped { own: usize, opponent: usize },
    /// Peek skipped because the fallback target was empty.
    Skipped(&'static str),
    /// The card has no effect.
    NoEffect,
}

/// Resolves card effects on game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve `effect` played by `actor`.
    pub fn resolve(
        frame: &mut Frame,
        effect: CardEffect,
        actor: Player,
        rng: &mut GameRng,
    ) -> ResolveResult {
        let result = match effect {
            CardEffect::PeekOwn => Self::peek(frame, actor, actor, rng),
            CardEffect::PeekOpponent => Self::peek(frame, actor.opponent(), actor, rng),
            CardEffect::BlindSwap => Self::swap(frame, actor, false, rng),
            CardEffect::KingSwap => Self::swap(frame, actor, true, rng),
            CardEffect::None => ResolveResult::NoEffect,
        };
        trace!("{actor} resolved {effect}: {result:?}");
        result
    }

    /// `viewer` learns one card in `owner`'s hand.
    fn peek(frame: &mut Frame, owner: Player, viewer: Player, rng: &mut GameRng) -> ResolveResult {
        let target = SlotSelector::select(&frame[owner], viewer, rng);
        if target.fallback {
            trace!("{viewer} has seen every card of {owner}, peeking slot {}", target.index);
        }
        let slot = &mut frame[owner][target.index];
        if !slot.is_occupied() {
            return ResolveResult::Skipped("peek target is empty");
        }
        slot.known[viewer] = true;
        ResolveResult::Peeked {
            owner,
            slot: target.index,
        }
    }

    /// Exchange one of the actor's unseen cards with one of the opponent's.
    ///
    /// With `remember_given`, the actor keeps knowledge of the card that
    /// lands in the opponent's hand.
    fn swap(frame: &mut Frame, actor: Player, remember_given: bool, rng: &mut GameRng) -> ResolveResult {
        let opponent = actor.opponent();
        let own = SlotSelector::select(&frame[actor], actor, rng);
        let theirs = SlotSelector::select(&frame[opponent], actor, rng);

        if own.fallback || theirs.fallback {
            trace!("{actor} swap fell back to slots {} / {}", own.index, theirs.index);
        }

        let given = frame[actor][own.index];
        frame[actor][own.index] = frame[opponent][theirs.index];
        frame[opponent][theirs.index] = given;

        if remember_given && given.is_occupied() {
            frame[opponent][theirs.index].known[actor] = true;
        }

        ResolveResult::Swapped {
            own: own.index,
            opponent: theirs.index,
        }
    }
}
