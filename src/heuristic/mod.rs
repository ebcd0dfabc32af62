//! Static evaluation of meta-board positions.
//!
//! A heuristic scores a position from one player's point of view. Larger is
//! better for that player. Decided games short-circuit to the sentinels
//! [`WIN_SCORE`] / [`LOSS_SCORE`], which no weighted sum can reach.

pub mod playout;
pub mod weighted;

pub use playout::{random_playout, PlayoutHeuristic};
pub use weighted::{HeuristicWeights, WeightedHeuristic};

use crate::board::{MetaBoard, Status};
use crate::core::PlayerId;

/// Evaluation score.
pub type Score = i32;

/// Score of a won game.
pub const WIN_SCORE: Score = 1_000_000;

/// Score of a lost (or drawn) game. Negation of [`WIN_SCORE`].
pub const LOSS_SCORE: Score = -WIN_SCORE;

/// Position evaluator shared across search threads.
pub trait Heuristic: Send + Sync {
    /// Score `board` for `player`.
    fn evaluate(&self, board: &MetaBoard, player: PlayerId) -> Score;
}

impl<H: Heuristic + ?Sized> Heuristic for &H {
    fn evaluate(&self, board: &MetaBoard, player: PlayerId) -> Score {
        (**self).evaluate(board, player)
    }
}

impl<H: Heuristic + ?Sized> Heuristic for Box<H> {
    fn evaluate(&self, board: &MetaBoard, player: PlayerId) -> Score {
        (**self).evaluate(board, player)
    }
}

/// Sentinel score for a finished game, `None` while it is running.
///
/// A draw scores as a loss.
#[must_use]
pub fn terminal_score(board: &MetaBoard, player: PlayerId) -> Option<Score> {
    match board.winner() {
        Status::Running => None,
        status if status.is_winner(player) => Some(WIN_SCORE),
        _ => Some(LOSS_SCORE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_are_symmetric() {
        assert_eq!(LOSS_SCORE, -WIN_SCORE);
        assert_eq!(-LOSS_SCORE, WIN_SCORE);
    }

    #[test]
    fn test_terminal_score_running() {
        let board = MetaBoard::new();
        assert_eq!(terminal_score(&board, PlayerId::ONE), None);
        assert_eq!(terminal_score(&board, PlayerId::TWO), None);
    }
}
