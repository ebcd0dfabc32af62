//! Monte Carlo evaluator: scores a position by random playouts.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{terminal_score, Heuristic, Score};
use crate::board::{MetaBoard, Status};
use crate::core::{GameRng, PlayerId};

/// Scale of a playout score: all playouts won gives `PLAYOUT_SCALE`.
pub const PLAYOUT_SCALE: Score = 1000;

/// Play uniformly random legal moves until the game is decided.
///
/// Returns the final status. A board with no legal moves left is decided, so
/// this always terminates with a non-`Running` status.
pub fn random_playout(board: &mut MetaBoard, rng: &mut GameRng) -> Status {
    loop {
        let status = board.winner();
        if status.is_decided() {
            return status;
        }
        let moves = board.legal_moves();
        let Some(&mv) = rng.choose(&moves) else {
            return Status::Draw;
        };
        if let Err(err) = board.make_move(mv) {
            warn!(mv, %err, "playout move rejected");
            return Status::Draw;
        }
    }
}

/// Evaluator that averages random playouts.
///
/// Score is `(wins - losses) * 1000 / playouts`. Each evaluation reseeds from
/// `seed`, so equal positions get equal scores.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayoutHeuristic {
    /// Playouts per evaluation.
    pub playouts: u32,

    /// Base seed for the playout RNG.
    pub seed: u64,
}

impl Default for PlayoutHeuristic {
    fn default() -> Self {
        Self {
            playouts: 32,
            seed: 42,
        }
    }
}

impl PlayoutHeuristic {
    /// Evaluator running `playouts` games per call.
    #[must_use]
    pub fn new(playouts: u32, seed: u64) -> Self {
        Self { playouts, seed }
    }
}

impl Heuristic for PlayoutHeuristic {
    fn evaluate(&self, board: &MetaBoard, player: PlayerId) -> Score {
        if let Some(score) = terminal_score(board, player) {
            return score;
        }
        if self.playouts == 0 {
            return 0;
        }

        let mut rng = GameRng::new(self.seed);
        let mut balance: i64 = 0;
        for _ in 0..self.playouts {
            let mut game = board.clone();
            let mut playout_rng = rng.fork();
            match random_playout(&mut game, &mut playout_rng).winner() {
                Some(winner) if winner == player => balance += 1,
                Some(_) => balance -= 1,
                None => {}
            }
        }

        (balance * i64::from(PLAYOUT_SCALE) / i64::from(self.playouts)) as Score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::WIN_SCORE;

    #[test]
    fn test_random_playout_terminates() {
        let mut rng = GameRng::new(3);
        for _ in 0..20 {
            let mut board = MetaBoard::new();
            let status = random_playout(&mut board, &mut rng);
            assert!(status.is_decided());
            assert_eq!(status, board.winner());
        }
    }

    #[test]
    fn test_playout_score_bounds() {
        let mut board = MetaBoard::new();
        board.make_move(40).unwrap();
        let h = PlayoutHeuristic::new(16, 9);
        let score = h.evaluate(&board, PlayerId::ONE);
        assert!((-PLAYOUT_SCALE..=PLAYOUT_SCALE).contains(&score));
    }

    #[test]
    fn test_playout_is_deterministic() {
        let board = MetaBoard::new();
        let h = PlayoutHeuristic::new(8, 5);
        assert_eq!(h.evaluate(&board, PlayerId::TWO), h.evaluate(&board, PlayerId::TWO));
    }

    #[test]
    fn test_zero_playouts() {
        let h = PlayoutHeuristic::new(0, 1);
        assert_eq!(h.evaluate(&MetaBoard::new(), PlayerId::ONE), 0);
    }

    #[test]
    fn test_sentinel_before_playouts() {
        let mut board = MetaBoard::new();
        for mv in [0, 80, 1, 79, 2, 71, 9, 70, 10, 62, 11, 61, 18, 53, 19, 52, 20] {
            board.make_move(mv).unwrap();
        }
        let h = PlayoutHeuristic::new(4, 1);
        assert_eq!(h.evaluate(&board, PlayerId::ONE), WIN_SCORE);
    }
}
