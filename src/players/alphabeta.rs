use tracing::debug;

use super::{commit, Player};
use crate::board::MetaBoard;
use crate::core::PlayError;
use crate::heuristic::Heuristic;
use crate::search::{AlphaBetaConfig, AlphaBetaSearch};

/// Player backed by [`AlphaBetaSearch`].
pub struct AlphaBetaPlayer<H: Heuristic> {
    search: AlphaBetaSearch<H>,
}

impl<H: Heuristic> AlphaBetaPlayer<H> {
    /// Create a player searching with `heuristic` under `config`.
    pub fn new(heuristic: H, config: AlphaBetaConfig) -> Self {
        Self {
            search: AlphaBetaSearch::new(heuristic, config),
        }
    }

    /// The underlying searcher.
    pub fn search(&self) -> &AlphaBetaSearch<H> {
        &self.search
    }
}

impl<H: Heuristic> Player for AlphaBetaPlayer<H> {
    fn play(&mut self, board: &mut MetaBoard) -> Result<usize, PlayError> {
        let mv = self.search.best_move(board);
        debug!(player = %board.current_player(), mv = ?mv, "alpha-beta move");
        commit(board, mv)
    }

    fn name(&self) -> String {
        "AlphaBeta".to_string()
    }

    fn params(&self) -> String {
        let config = self.search.config();
        format!("depth={} parallel={}", config.depth, config.parallel)
    }
}
