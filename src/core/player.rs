//! Player identification.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two sides of a game. `PlayerId::ONE` marks
//! with `X` and always moves first, `PlayerId::TWO` marks with `O`.

use serde::{Deserialize, Serialize};

use super::error::BoardError;

/// One of the two players.
///
/// Player indices are 0-based: the first player is `PlayerId::ONE` (index 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who moves first (`X`).
    pub const ONE: PlayerId = PlayerId(0);

    /// The player who moves second (`O`).
    pub const TWO: PlayerId = PlayerId(1);

    /// Both players in turn order.
    pub const BOTH: [PlayerId; 2] = [PlayerId::ONE, PlayerId::TWO];

    /// Create a player ID from a raw index, rejecting anything but 0 or 1.
    pub fn try_new(index: u8) -> Result<Self, BoardError> {
        match index {
            0 | 1 => Ok(Self(index)),
            other => Err(BoardError::InvalidPlayer(other)),
        }
    }

    /// Get the raw player index (0-based).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Board symbol for this player.
    #[must_use]
    pub const fn symbol(self) -> char {
        if self.0 == 0 {
            'X'
        } else {
            'O'
        }
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = BoardError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::try_new(index)
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {} ({})", self.0 + 1, self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::ONE.index(), 0);
        assert_eq!(PlayerId::TWO.index(), 1);
        assert_eq!(format!("{}", PlayerId::ONE), "Player 1 (X)");
        assert_eq!(format!("{}", PlayerId::TWO), "Player 2 (O)");
    }

    #[test]
    fn test_opponent_is_involution() {
        for player in PlayerId::BOTH {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert_eq!(PlayerId::try_new(0), Ok(PlayerId::ONE));
        assert_eq!(PlayerId::try_from(1), Ok(PlayerId::TWO));
        assert_eq!(PlayerId::try_new(2), Err(BoardError::InvalidPlayer(2)));
        assert_eq!(PlayerId::try_new(255), Err(BoardError::InvalidPlayer(255)));
    }

    #[test]
    fn test_symbols() {
        assert_eq!(PlayerId::ONE.symbol(), 'X');
        assert_eq!(PlayerId::TWO.symbol(), 'O');
    }

    #[test]
    fn test_player_id_serialization() {
        let json = serde_json::to_string(&PlayerId::TWO).unwrap();
        assert_eq!(json, "1");
        let deserialized: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, PlayerId::TWO);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        let err = serde_json::from_str::<PlayerId>("2").unwrap_err();
        assert!(err.to_string().contains("Invalid player index: 2"));
        assert!(serde_json::from_str::<PlayerId>("255").is_err());
    }
}
