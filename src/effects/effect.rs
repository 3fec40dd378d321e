//! Card effect definitions.
//!
//! Every played card maps to exactly one `CardEffect`. The mapping is
//! computed once from the card's rank and red-king status, and resolution
//! matches on it exhaustively.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Special effect triggered by playing a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardEffect {
    /// 7 or 8: look at one of your own unseen hand cards.
    PeekOwn,
    /// 9 or 10: look at one of the opponent's unseen hand cards.
    PeekOpponent,
    /// Jack or Queen: swap one of your unseen cards with one of the
    /// opponent's, neither player learning the result.
    BlindSwap,
    /// Black king: blind swap, then remember the card you gave away.
    KingSwap,
    /// Every other card, including red kings.
    None,
}

impl CardEffect {
    /// Effect of playing `card`.
    ///
    /// ```
    /// use rust_cambia::cards::CardId;
    /// use rust_cambia::effects::CardEffect;
    ///
    /// assert_eq!(CardEffect::for_card(CardId::new(6)), CardEffect::PeekOwn);
    /// assert_eq!(CardEffect::for_card(CardId::new(12)), CardEffect::KingSwap);
    /// assert_eq!(CardEffect::for_card(CardId::new(38)), CardEffect::None);
    /// ```
    #[must_use]
    pub fn for_card(card: CardId) -> Self {
        // Red-king status comes from the raw identifier, before the rank
        // folds it together with the black kings.
        let red_king = card.is_red_king();
        match card.rank() {
            7 | 8 => CardEffect::PeekOwn,
            9 | 10 => CardEffect::PeekOpponent,
            11 | 12 => CardEffect::BlindSwap,
            13 if red_king => CardEffect::None,
            13 => CardEffect::KingSwap,
            _ => CardEffect::None,
        }
    }

    /// Whether the effect moves cards between the two hands.
    #[must_use]
    pub fn is_swap(self) -> bool {
        matches!(self, CardEffect::BlindSwap | CardEffect::KingSwap)
    }
}

impl std::fmt::Display for CardEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardEffect::PeekOwn => "peek own",
            CardEffect::PeekOpponent => "peek opponent",
            CardEffect::BlindSwap => "blind swap",
            CardEffect::KingSwap => "king swap",
            CardEffect::None => "no effect",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CARD_ID_COUNT;

    #[test]
    fn test_effect_by_rank() {
        // Ids 6..=12 are ranks 7..=13 in the first suit
        assert_eq!(CardEffect::for_card(CardId::new(6)), CardEffect::PeekOwn);
        assert_eq!(CardEffect::for_card(CardId::new(7)), CardEffect::PeekOwn);
        assert_eq!(CardEffect::for_card(CardId::new(8)), CardEffect::PeekOpponent);
        assert_eq!(CardEffect::for_card(CardId::new(9)), CardEffect::PeekOpponent);
        assert_eq!(CardEffect::for_card(CardId::new(10)), CardEffect::BlindSwap);
        assert_eq!(CardEffect::for_card(CardId::new(11)), CardEffect::BlindSwap);
        assert_eq!(CardEffect::for_card(CardId::new(12)), CardEffect::KingSwap);
        assert_eq!(CardEffect::for_card(CardId::new(0)), CardEffect::None);
    }

    #[test]
    fn test_red_kings_have_no_effect() {
        assert_eq!(CardEffect::for_card(CardId::new(38)), CardEffect::None);
        assert_eq!(CardEffect::for_card(CardId::new(51)), CardEffect::None);
        assert_eq!(CardEffect::for_card(CardId::new(25)), CardEffect::KingSwap);
    }

    #[test]
    fn test_sentinels_have_no_effect() {
        assert_eq!(CardEffect::for_card(CardId::UNKNOWN), CardEffect::None);
        assert_eq!(CardEffect::for_card(CardId::PLACEHOLDER), CardEffect::None);
    }

    #[test]
    fn test_effect_counts_per_suit() {
        let swaps = (0..CARD_ID_COUNT)
            .map(CardId::new)
            .filter(|c| CardEffect::for_card(*c).is_swap())
            .count();
        // 4 jacks + 4 queens + 2 black kings
        assert_eq!(swaps, 10);
    }
}
