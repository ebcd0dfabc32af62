//! Depth-limited minimax with alpha-beta pruning.
//!
//! The root fans out one task per legal move on the rayon pool; each task
//! searches its subtree sequentially with a full `(-INF, +INF)` window. The
//! best root move is the first one reaching the maximum score.
//!
//! `depth` counts plies from the root, the root move being ply 1.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::board::MetaBoard;
use crate::core::PlayerId;
use crate::heuristic::{Heuristic, Score};

/// Window bound. Larger than any sentinel score.
pub const INFINITY: Score = Score::MAX;

/// Alpha-beta configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphaBetaConfig {
    /// Search depth in plies, including the root move. 0 is treated as 1.
    pub depth: u32,

    /// Search root moves in parallel on the rayon pool.
    pub parallel: bool,
}

impl Default for AlphaBetaConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            parallel: true,
        }
    }
}

impl AlphaBetaConfig {
    /// Set the search depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Enable or disable root parallelism.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Alpha-beta searcher over a heuristic.
pub struct AlphaBetaSearch<H: Heuristic> {
    heuristic: H,
    config: AlphaBetaConfig,
    nodes: AtomicU64,
}

impl<H: Heuristic> AlphaBetaSearch<H> {
    /// Create a searcher.
    pub fn new(heuristic: H, config: AlphaBetaConfig) -> Self {
        Self {
            heuristic,
            config,
            nodes: AtomicU64::new(0),
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &AlphaBetaConfig {
        &self.config
    }

    /// The heuristic used at leaves.
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Nodes visited by the most recent root search.
    #[must_use]
    pub fn nodes_visited(&self) -> u64 {
        self.nodes.load(Ordering::Relaxed)
    }

    /// Minimax value of `board` for `owner`.
    ///
    /// Leaves are `depth == 0`, a decided game, or a board with no legal
    /// moves. Children are searched in `legal_moves()` order and the loop
    /// stops once `alpha >= beta`. Fail-hard: the result is clamped to the
    /// window.
    pub fn alphabeta(
        &self,
        board: &MetaBoard,
        owner: PlayerId,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Score {
        self.nodes.fetch_add(1, Ordering::Relaxed);

        let moves = board.legal_moves();
        if depth == 0 || moves.is_empty() || board.is_game_over() {
            return self.heuristic.evaluate(board, owner);
        }

        for mv in moves {
            let mut child = board.clone();
            if child.make_move(mv).is_err() {
                continue;
            }
            let score = self.alphabeta(&child, owner, depth - 1, alpha, beta, !maximizing);
            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if alpha >= beta {
                break;
            }
        }

        if maximizing {
            alpha
        } else {
            beta
        }
    }

    /// Score every legal root move for the player to move, in
    /// `legal_moves()` order.
    pub fn evaluate_moves(&self, board: &MetaBoard) -> Vec<(usize, Score)> {
        let owner = board.current_player();
        let remaining = self.config.depth.max(1) - 1;

        let score_move = |&mv: &usize| -> Option<(usize, Score)> {
            let mut child = board.clone();
            child.make_move(mv).ok()?;
            let score = self.alphabeta(&child, owner, remaining, -INFINITY, INFINITY, false);
            trace!(mv, score, "root move searched");
            Some((mv, score))
        };

        let moves = board.legal_moves();
        if self.config.parallel {
            moves.as_slice().par_iter().filter_map(score_move).collect()
        } else {
            moves.iter().filter_map(score_move).collect()
        }
    }

    /// Best move for the player to move, or `None` if there are no legal
    /// moves.
    ///
    /// Ties go to the earliest move in `legal_moves()` order.
    pub fn best_move(&self, board: &MetaBoard) -> Option<usize> {
        let fallback = *board.legal_moves().first()?;
        self.nodes.store(0, Ordering::Relaxed);
        let start = Instant::now();

        let scored = self.evaluate_moves(board);
        let best = scored
            .iter()
            .fold(None, |best: Option<(usize, Score)>, &(mv, score)| match best {
                Some((_, top)) if top >= score => best,
                _ => Some((mv, score)),
            });

        debug!(
            depth = self.config.depth,
            nodes = self.nodes_visited(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            best = ?best,
            "alpha-beta search complete"
        );

        Some(best.map_or(fallback, |(mv, _)| mv))
    }
}
