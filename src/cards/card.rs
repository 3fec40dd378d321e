//! Card identifiers and their derived properties.
//!
//! A card is nothing but its identifier. Rank, red-king status and score
//! are all pure functions of the identifier.

use serde::{Deserialize, Serialize};

/// Number of distinct card identifiers, sentinels included.
pub const CARD_ID_COUNT: u8 = 54;

/// Identifiers below this value are real cards.
pub const REAL_CARD_COUNT: u8 = 52;

/// Identifiers of the two red kings.
pub const RED_KINGS: [u8; 2] = [38, 51];

/// Card identifier in `[0, 53]`.
///
/// Identifiers 52 and 53 are sentinels that never count as real cards.
///
/// ## Example
///
/// ```
/// use rust_cambia::cards::CardId;
///
/// let queen = CardId::new(11);
/// assert_eq!(queen.rank(), 12);
/// assert_eq!(queen.score(), 12);
///
/// let red_king = CardId::new(38);
/// assert_eq!(red_king.rank(), 13);
/// assert_eq!(red_king.score(), -1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Sentinel shown in place of a card the viewer has not seen.
    pub const UNKNOWN: CardId = CardId(52);

    /// Placeholder sentinel.
    pub const PLACEHOLDER: CardId = CardId(53);

    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Get the ID as an index into per-identifier tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether the identifier lies in `[0, 53]`.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < CARD_ID_COUNT
    }

    /// Whether this is a real card rather than a sentinel.
    #[must_use]
    pub const fn is_real(self) -> bool {
        self.0 < REAL_CARD_COUNT
    }

    /// Whether this is one of the two red kings.
    #[must_use]
    pub const fn is_red_king(self) -> bool {
        self.0 == RED_KINGS[0] || self.0 == RED_KINGS[1]
    }

    /// Rank before normalization: `(id + 1) mod 13`, where 0 is a King.
    #[must_use]
    pub const fn raw_rank(self) -> u8 {
        ((self.0 as u16 + 1) % 13) as u8
    }

    /// Face rank in `1..=13` (13 = King).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self.raw_rank() {
            0 => 13,
            r => r,
        }
    }

    /// Point value of the card.
    ///
    /// Red kings are worth -1 and sentinels 0. Every other card is worth
    /// its raw rank, so a black king is worth 0.
    #[must_use]
    pub const fn score(self) -> i32 {
        if self.is_red_king() {
            -1
        } else if !self.is_real() {
            0
        } else {
            self.raw_rank() as i32
        }
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_real() {
            write!(f, "Card({}, rank {})", self.0, self.rank())
        } else {
            write!(f, "Card({}, sentinel)", self.0)
        }
    }
}
