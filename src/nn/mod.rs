//! Tensor encodings of Cambia states.
//!
//! - **Board**: `BoardEncoder`, lossless `[4, 10, 56]` planes with `decode`
//! - **Observation**: `ObservationEncoder`, the redacted `[4, 10, 55]`
//!   learner input behind the `StateEncoder` trait
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rust_cambia::nn::{ObservationEncoder, StateEncoder};
//!
//! let encoder = ObservationEncoder::new();
//! let encoded = encoder.encode(&state, player);
//! ```

pub mod encoder;
pub mod traits;

pub use encoder::{
    BoardEncoder, BoardTensor, ObservationEncoder, StateEncoder, BOARD_CHANNELS, BOARD_ROWS,
    CARD_CHANNELS, OBSERVATION_CHANNELS,
};
pub use traits::EncodedState;
