//! Two-player Cambia.
//!
//! - Each player holds four face-down cards plus a draw slot
//! - On your turn: play one hand card (the drawn card replaces it) or the
//!   drawn card itself
//! - 7/8 peek own, 9/10 peek opponent, jack/queen blind swap, black king
//!   swap and look
//! - Every other card of the played rank is discarded from the table
//! - A hand worth 1 or less ends the game; after the turn limit the lower
//!   hand wins

mod game;

pub use game::{CambiaGame, CambiaGameBuilder};
