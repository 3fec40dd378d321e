//! Game implementations.

pub mod cambia;

pub use cambia::{CambiaGame, CambiaGameBuilder};
