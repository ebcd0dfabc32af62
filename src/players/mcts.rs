use tracing::debug;

use super::{commit, Player};
use crate::board::MetaBoard;
use crate::core::PlayError;
use crate::mcts::{MCTSConfig, MCTSSearch, RolloutPolicy, SearchBudget};

/// Player backed by [`MCTSSearch`].
pub struct MctsPlayer {
    search: MCTSSearch,
}

impl MctsPlayer {
    /// Create a player with UCT selection and random rollouts.
    pub fn new(config: MCTSConfig) -> Self {
        Self {
            search: MCTSSearch::new(config),
        }
    }

    /// Replace the rollout policy.
    pub fn with_rollout<R: RolloutPolicy + 'static>(mut self, rollout: R) -> Self {
        self.search = self.search.with_rollout(rollout);
        self
    }

    /// The underlying search, including the tree of the last move.
    pub fn search(&self) -> &MCTSSearch {
        &self.search
    }
}

impl Player for MctsPlayer {
    fn play(&mut self, board: &mut MetaBoard) -> Result<usize, PlayError> {
        let mv = self.search.search(board);
        let stats = self.search.stats();
        debug!(
            player = %board.current_player(),
            mv = ?mv,
            iterations = stats.iterations,
            "MCTS move"
        );
        commit(board, mv)
    }

    fn name(&self) -> String {
        "MCTS".to_string()
    }

    fn params(&self) -> String {
        let config = self.search.config();
        let budget = match config.budget {
            SearchBudget::Iterations(n) => format!("iterations={n}"),
            SearchBudget::TimeMillis(ms) => format!("time={ms}ms"),
        };
        format!("{budget} c={:.3}", config.exploration_constant)
    }
}
