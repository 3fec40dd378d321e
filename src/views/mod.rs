//! Player views of a game state.
//!
//! - `perspective`: canonical form with the viewer in seat one
//! - `redaction`: hide every identity the viewer has not seen
//!
//! Both are pure functions of the state.

pub mod perspective;
pub mod redaction;

pub use perspective::{canonical, swap_perspective};
pub use redaction::{observe, redact, ObservedFrame, ObservedSlot, ObservedState};
