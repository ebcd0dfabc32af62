//! Linear evaluator with tuned weights.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

use super::{terminal_score, Heuristic, Score};
use crate::board::{MetaBoard, Status};
use crate::core::PlayerId;

/// Weights of the linear evaluator.
///
/// Defaults are the tuned values the engine plays with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    /// Per local board, multiplied by own marks minus opponent marks.
    pub mark_difference: i32,

    /// Per local board won.
    pub local_win: i32,

    /// Per local board lost (usually negative).
    pub local_loss: i32,

    /// Per local board drawn (usually negative).
    pub local_draw: i32,

    /// Multiplier for each local board's partial line score.
    pub partial_line: i32,

    /// Per local center cell held.
    pub local_center: i32,

    /// Bonus for winning the center local board.
    pub center_board: i32,

    /// Multiplier for macro partial wins difference.
    pub macro_partial: i32,

    /// Exclusive upper bound of the jitter term (0 disables it).
    pub jitter: u32,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            mark_difference: 10,
            local_win: 300,
            local_loss: -30,
            local_draw: -5,
            partial_line: 30,
            local_center: 1,
            center_board: 200,
            macro_partial: 300,
            jitter: 5,
        }
    }
}

impl HeuristicWeights {
    /// Set the jitter bound.
    pub fn with_jitter(mut self, jitter: u32) -> Self {
        self.jitter = jitter;
        self
    }

    /// Set the macro partial wins multiplier.
    pub fn with_macro_partial(mut self, weight: i32) -> Self {
        self.macro_partial = weight;
        self
    }
}

/// Tuned linear evaluator.
///
/// The jitter term is a hash of `(board, player, seed)`, so equal inputs
/// always give equal scores and evaluation needs no shared RNG.
#[derive(Clone, Debug, Default)]
pub struct WeightedHeuristic {
    weights: HeuristicWeights,
    seed: u64,
}

impl WeightedHeuristic {
    /// Evaluator with the given weights and jitter seed.
    #[must_use]
    pub fn new(weights: HeuristicWeights, seed: u64) -> Self {
        Self { weights, seed }
    }

    /// Change the jitter seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The active weights.
    #[must_use]
    pub fn weights(&self) -> &HeuristicWeights {
        &self.weights
    }

    fn jitter(&self, board: &MetaBoard, player: PlayerId) -> Score {
        if self.weights.jitter == 0 {
            return 0;
        }
        let mut hasher = FxHasher::default();
        board.hash(&mut hasher);
        player.hash(&mut hasher);
        self.seed.hash(&mut hasher);
        (hasher.finish() % u64::from(self.weights.jitter)) as Score
    }

    /// The weighted sum without sentinel handling or jitter.
    #[must_use]
    pub fn structural_score(&self, board: &MetaBoard, player: PlayerId) -> Score {
        let w = &self.weights;
        let opponent = player.opponent();
        let mut value = 0;

        for local in board.locals() {
            let marks = local.mark_count(player) as i32 - local.mark_count(opponent) as i32;
            value += marks * w.mark_difference;

            value += match local.status() {
                status if status.is_winner(player) => w.local_win,
                status if status.is_winner(opponent) => w.local_loss,
                Status::Draw => w.local_draw,
                _ => 0,
            };

            value += local.partial_line_score(player) * w.partial_line;

            if local.holds_center(player) {
                value += w.local_center;
            }
        }

        if board.holds_center_board(player) {
            value += w.center_board;
        }

        value + board.partial_wins_difference(player) * w.macro_partial
    }
}

impl Heuristic for WeightedHeuristic {
    fn evaluate(&self, board: &MetaBoard, player: PlayerId) -> Score {
        if let Some(score) = terminal_score(board, player) {
            return score;
        }
        self.structural_score(board, player) + self.jitter(board, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::{LOSS_SCORE, WIN_SCORE};

    fn play(board: &mut MetaBoard, moves: &[usize]) {
        for &mv in moves {
            board.make_move(mv).unwrap();
        }
    }

    fn no_jitter() -> WeightedHeuristic {
        WeightedHeuristic::new(HeuristicWeights::default().with_jitter(0), 0)
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let board = MetaBoard::new();
        let h = no_jitter();
        assert_eq!(h.evaluate(&board, PlayerId::ONE), 0);
        assert_eq!(h.evaluate(&board, PlayerId::TWO), 0);
    }

    #[test]
    fn test_single_center_mark() {
        let mut board = MetaBoard::new();
        play(&mut board, &[4]);
        let h = no_jitter();
        // One extra mark plus the local center.
        assert_eq!(h.evaluate(&board, PlayerId::ONE), 11);
        assert_eq!(h.evaluate(&board, PlayerId::TWO), -10);
    }

    #[test]
    fn test_local_win_terms() {
        let mut board = MetaBoard::new();
        // X takes board 0 across the top row, O drops two marks in board 8.
        play(&mut board, &[0, 72, 1, 75, 2]);
        let h = no_jitter();

        // Board 0: 3 marks, win, fragment 0 held (index 0).
        // Board 8: -2 marks, O holds fragment 9 (cells 0,3).
        let one = 3 * 10 + 300 + (-2 * 10) + (-9 * 30);
        assert_eq!(h.evaluate(&board, PlayerId::ONE), one);

        let two = -3 * 10 - 30 + 2 * 10 + 9 * 30;
        assert_eq!(h.evaluate(&board, PlayerId::TWO), two);
    }

    #[test]
    fn test_sentinels_on_decided_game() {
        let mut board = MetaBoard::new();
        play(&mut board, &[0, 80, 1, 79, 2]);
        play(&mut board, &[71]);
        play(&mut board, &[9, 70, 10, 69, 11]);
        play(&mut board, &[62]);
        play(&mut board, &[18, 61, 19, 60, 20]);
        assert_eq!(board.winner(), Status::PlayerOne);

        let h = WeightedHeuristic::default();
        assert_eq!(h.evaluate(&board, PlayerId::ONE), WIN_SCORE);
        assert_eq!(h.evaluate(&board, PlayerId::TWO), LOSS_SCORE);
    }

    #[test]
    fn test_jitter_is_bounded_and_deterministic() {
        let mut board = MetaBoard::new();
        play(&mut board, &[40, 36]);
        let plain = no_jitter().evaluate(&board, PlayerId::ONE);

        let h = WeightedHeuristic::new(HeuristicWeights::default(), 7);
        let first = h.evaluate(&board, PlayerId::ONE);
        assert!((plain..plain + 5).contains(&first));
        assert_eq!(first, h.evaluate(&board, PlayerId::ONE));
    }

    #[test]
    fn test_weights_serialization() {
        let weights = HeuristicWeights::default().with_macro_partial(250);
        let json = serde_json::to_string(&weights).unwrap();
        let deserialized: HeuristicWeights = serde_json::from_str(&json).unwrap();
        assert_eq!(weights, deserialized);

        let partial: HeuristicWeights = serde_json::from_str(r#"{"jitter":0}"#).unwrap();
        assert_eq!(partial.jitter, 0);
        assert_eq!(partial.local_win, 300);
    }
}
