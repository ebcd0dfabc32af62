//! Outcome of a local board or of the whole game.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// State of a board: still being played, won by one side, or drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Moves can still change the outcome.
    #[default]
    Running,
    /// Won by `PlayerId::ONE`.
    PlayerOne,
    /// Won by `PlayerId::TWO`.
    PlayerTwo,
    /// Full (or fully decided) with no winner.
    Draw,
}

impl Status {
    /// The winning status for a player.
    #[must_use]
    pub const fn won_by(player: PlayerId) -> Self {
        match player.index() {
            0 => Status::PlayerOne,
            _ => Status::PlayerTwo,
        }
    }

    /// The winner, if any.
    #[must_use]
    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            Status::PlayerOne => Some(PlayerId::ONE),
            Status::PlayerTwo => Some(PlayerId::TWO),
            Status::Running | Status::Draw => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: PlayerId) -> bool {
        self.winner() == Some(player)
    }

    /// True once the outcome is fixed.
    #[must_use]
    pub const fn is_decided(self) -> bool {
        !matches!(self, Status::Running)
    }
}

impl From<PlayerId> for Status {
    fn from(player: PlayerId) -> Self {
        Status::won_by(player)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Running => write!(f, "Running"),
            Status::PlayerOne => write!(f, "Player 1 wins"),
            Status::PlayerTwo => write!(f, "Player 2 wins"),
            Status::Draw => write!(f, "Draw"),
        }
    }
}
