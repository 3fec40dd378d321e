//! Card effects.
//!
//! - `CardEffect`: the effect a played card triggers, derived from its rank
//! - `SlotSelector`: how an effect picks the slot it acts on
//! - `EffectResolver`: applies an effect to the current frame
//!
//! Selection is random: effects aim at cards the acting player has not
//! seen, so the engine samples among them with the game's own RNG.

mod effect;
mod targeting;
mod resolver;

pub use effect::CardEffect;
pub use targeting::{SlotSelector, SlotTarget};
pub use resolver::{EffectResolver, ResolveResult};
