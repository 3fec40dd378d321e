//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Cambia is strictly two-player. Players carry the `+1` / `-1` sign
//! convention used by the self-play driver.
//!
//! ## PlayerPair
//!
//! Fixed two-entry storage indexed by `Player`. Used for both hands of a
//! frame and for the per-viewer knowledge flags of a slot.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::{CambiaError, Result};

/// One of the two players.
///
/// `Player::One` has sign `+1`, `Player::Two` has sign `-1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players, player one first.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Get the 0-based index (player one = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Get the driver-facing sign (`+1` or `-1`).
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Player::One => 1,
            Player::Two => -1,
        }
    }

    /// Parse a driver-facing sign.
    ///
    /// ```
    /// use rust_cambia::core::Player;
    ///
    /// assert_eq!(Player::from_sign(1).unwrap(), Player::One);
    /// assert_eq!(Player::from_sign(-1).unwrap(), Player::Two);
    /// assert!(Player::from_sign(0).is_err());
    /// ```
    pub fn from_sign(sign: i8) -> Result<Self> {
        match sign {
            1 => Ok(Player::One),
            -1 => Ok(Player::Two),
            other => Err(CambiaError::invalid_state(format!(
                "player sign must be +1 or -1, got {other}"
            ))),
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_cambia::core::{Player, PlayerPair};
///
/// let mut known = PlayerPair::with_value(false);
/// known[Player::Two] = true;
///
/// assert!(!known[Player::One]);
/// assert!(known[Player::Two]);
///
/// known.swap();
/// assert!(known[Player::One]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create from explicit values for player one and player two.
    pub const fn new(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create with values from a factory function.
    pub fn from_fn(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Exchange the two entries.
    pub fn swap(&mut self) {
        self.data.swap(0, 1);
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Player, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Player, &mut T)> {
        Player::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Player> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerPair<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_basics() {
        assert_eq!(Player::One.index(), 0);
        assert_eq!(Player::Two.index(), 1);
        assert_eq!(Player::One.sign(), 1);
        assert_eq!(Player::Two.sign(), -1);
        assert_eq!(format!("{}", Player::Two), "Player 2");
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(Player::One.opponent().opponent(), Player::One);
    }

    #[test]
    fn test_player_from_sign_rejects_zero() {
        assert!(matches!(
            Player::from_sign(0),
            Err(CambiaError::InvalidState(_))
        ));
        assert!(Player::from_sign(2).is_err());
    }

    #[test]
    fn test_pair_from_fn() {
        let pair = PlayerPair::from_fn(|p| p.sign() as i32 * 10);

        assert_eq!(pair[Player::One], 10);
        assert_eq!(pair[Player::Two], -10);
    }

    #[test]
    fn test_pair_mutation_and_swap() {
        let mut pair = PlayerPair::new(1, 2);
        pair[Player::One] = 5;
        pair.swap();

        assert_eq!(pair[Player::One], 2);
        assert_eq!(pair[Player::Two], 5);
    }

    #[test]
    fn test_pair_iter() {
        let pair = PlayerPair::new('a', 'b');
        let pairs: Vec<_> = pair.iter().collect();

        assert_eq!(pairs, vec![(Player::One, &'a'), (Player::Two, &'b')]);
    }

    #[test]
    fn test_pair_serialization() {
        let pair = PlayerPair::new(true, false);
        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: PlayerPair<bool> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }
}
