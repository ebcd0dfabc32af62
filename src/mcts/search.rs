//! Core MCTS search algorithm.
//!
//! Each iteration selects a leaf with the selection policy, expands it into
//! one child per legal move, plays one new child out with the rollout policy,
//! and backpropagates the outcome to the root. The move played is the root's
//! most visited child.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::board::MetaBoard;
use crate::core::GameRng;

use super::config::MCTSConfig;
use super::node::NodeId;
use super::policy::{RandomRollout, RolloutPolicy, SelectionPolicy, Uct};
use super::stats::SearchStats;
use super::tree::MCTSTree;

/// Main MCTS search context.
///
/// Owns the search tree and configuration, and provides methods to run
/// searches. The tree is rebuilt from scratch on every call to
/// [`MCTSSearch::search`].
pub struct MCTSSearch {
    /// Search configuration.
    config: MCTSConfig,

    /// The search tree.
    tree: MCTSTree,

    /// RNG for child picks; rollouts use forks of it.
    rng: GameRng,

    /// Selection policy.
    selection: Box<dyn SelectionPolicy>,

    /// Rollout policy.
    rollout: Box<dyn RolloutPolicy>,

    /// Search statistics.
    stats: SearchStats,
}

impl MCTSSearch {
    /// Create a new MCTS search context with UCT selection and random
    /// rollouts.
    pub fn new(config: MCTSConfig) -> Self {
        let rng = GameRng::new(config.seed);
        let capacity = config.max_nodes.min(1 << 16);

        Self {
            config,
            tree: MCTSTree::with_capacity(MetaBoard::new(), capacity),
            rng,
            selection: Box::new(Uct),
            rollout: Box::new(RandomRollout),
            stats: SearchStats::default(),
        }
    }

    /// Set a custom selection policy.
    pub fn with_selection<S: SelectionPolicy + 'static>(mut self, selection: S) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Set a custom rollout policy.
    pub fn with_rollout<R: RolloutPolicy + 'static>(mut self, rollout: R) -> Self {
        self.rollout = Box::new(rollout);
        self
    }

    /// Run MCTS from `board` until the budget is spent.
    ///
    /// Returns the most visited root move, or `None` if there are no legal
    /// moves. The RNG is reseeded from `config.seed` on every call, so
    /// repeated searches of one position under an iteration budget agree.
    pub fn search(&mut self, board: &MetaBoard) -> Option<usize> {
        let start = Instant::now();
        self.stats.reset();
        self.tree.reset(board.clone());
        self.rng = GameRng::new(self.config.seed);

        let legal = board.legal_moves();
        let fallback = *legal.first()?;

        // Check for single move (no choice)
        if legal.len() == 1 {
            return Some(fallback);
        }

        while self.config.budget.allows(self.stats.iterations, start.elapsed()) {
            self.iteration();
            self.stats.iterations += 1;

            // Check node limit
            if self.tree.len() >= self.config.max_nodes {
                debug!(nodes = self.tree.len(), "MCTS node limit reached");
                break;
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        let best = self
            .tree
            .robust_child(self.tree.root())
            .and_then(|child| self.tree.get(child).mv);

        debug!(
            iterations = self.stats.iterations,
            nodes = self.tree.len(),
            max_depth = self.stats.max_depth,
            time_us = self.stats.time_us,
            best = ?best,
            "MCTS search complete"
        );

        Some(best.unwrap_or(fallback))
    }

    /// Single MCTS iteration: select, expand, simulate, backpropagate.
    fn iteration(&mut self) {
        // === SELECTION ===
        let mut current = self.tree.root();
        while let Some(child) = self.selection.select(&self.tree, current, &self.config) {
            current = child;
        }

        // === EXPANSION ===
        let leaf = if self.tree.get(current).is_terminal {
            self.stats.terminal_hits += 1;
            current
        } else {
            let children = self.expand(current);
            match self.rng.choose(&children) {
                Some(&child) => child,
                None => current,
            }
        };

        // === SIMULATION ===
        let node = self.tree.get(leaf);
        let outcome = if node.is_terminal {
            node.board.winner()
        } else {
            let mut board = node.board.clone();
            let mut sim_rng = self.rng.fork();
            self.stats.simulations += 1;
            self.rollout.rollout(&mut board, &mut sim_rng)
        };

        // === BACKPROPAGATION ===
        self.tree.backpropagate(leaf, outcome);
    }

    /// Create one child per legal move of `node_id`.
    ///
    /// With `parallel_expansion` the child boards are built on the rayon pool;
    /// results are joined in move order before being linked.
    fn expand(&mut self, node_id: NodeId) -> Vec<NodeId> {
        let parent = &self.tree.get(node_id).board;
        let moves = parent.legal_moves();

        let build = |&mv: &usize| -> Option<(usize, MetaBoard)> {
            let mut child = parent.clone();
            child.make_move(mv).ok()?;
            Some((mv, child))
        };

        let boards: Vec<(usize, MetaBoard)> = if self.config.parallel_expansion {
            moves.as_slice().par_iter().filter_map(build).collect()
        } else {
            moves.iter().filter_map(build).collect()
        };

        let children: Vec<NodeId> = boards
            .into_iter()
            .map(|(mv, board)| self.tree.add_child(node_id, mv, board))
            .collect();

        let depth = self.tree.get(node_id).depth + 1;
        if !children.is_empty() && depth > self.stats.max_depth {
            self.stats.max_depth = depth;
        }
        self.stats.nodes_expanded += children.len() as u32;

        trace!(node = node_id.raw(), children = children.len(), depth, "expanded node");
        children
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the search tree.
    #[must_use]
    pub fn tree(&self) -> &MCTSTree {
        &self.tree
    }

    /// Root moves with their visit counts, in `legal_moves()` order.
    pub fn move_visits(&self) -> Vec<(usize, u32)> {
        let root = self.tree.root_node();
        root.children
            .iter()
            .filter_map(|&child| {
                let node = self.tree.get(child);
                node.mv.map(|mv| (mv, node.visits))
            })
            .collect()
    }

    /// Get the configuration.
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::heuristic::WeightedHeuristic;
    use crate::mcts::config::SearchBudget;
    use crate::mcts::policy::HeuristicRollout;

    fn winning_position() -> MetaBoard {
        let mut board = MetaBoard::new();
        for mv in [0, 80, 1, 79, 2, 71, 9, 70, 10, 62, 11, 61, 18, 53, 19, 47] {
            board.make_move(mv).unwrap();
        }
        board
    }

    #[test]
    fn test_search_returns_legal_move() {
        let board = MetaBoard::new();
        let mut search = MCTSSearch::new(MCTSConfig::default().with_iterations(100));
        let mv = search.search(&board);

        assert!(mv.is_some_and(|mv| board.legal_moves().contains(&mv)));
    }

    #[test]
    fn test_search_stats() {
        let board = MetaBoard::new();
        let mut search = MCTSSearch::new(MCTSConfig::default().with_iterations(50));
        search.search(&board);

        let stats = search.stats();
        assert_eq!(stats.iterations, 50);
        assert!(stats.simulations > 0);
        assert!(stats.nodes_expanded >= 81);
        assert!(stats.max_depth >= 1);
    }

    #[test]
    fn test_root_visits_equal_iterations() {
        let board = MetaBoard::new();
        let mut search = MCTSSearch::new(MCTSConfig::default().with_iterations(120));
        search.search(&board);

        let root = search.tree().root_node();
        assert_eq!(root.visits, 120);
        let child_visits: u32 = root.children.iter().map(|&c| search.tree().get(c).visits).sum();
        // Every iteration passes through exactly one root child.
        assert_eq!(child_visits, 120);
    }

    #[test]
    fn test_search_deterministic() {
        let mut board = MetaBoard::new();
        board.make_move(40).unwrap();
        let config = MCTSConfig::default().with_seed(12345).with_iterations(200);

        let mut search1 = MCTSSearch::new(config.clone());
        let mut search2 = MCTSSearch::new(config);

        assert_eq!(search1.search(&board), search2.search(&board));
        assert_eq!(search1.move_visits(), search2.move_visits());
    }

    #[test]
    fn test_repeated_search_is_deterministic() {
        let board = winning_position();
        let mut search = MCTSSearch::new(MCTSConfig::default().with_seed(77).with_iterations(150));

        let first = search.search(&board);
        let first_visits = search.move_visits();
        let second = search.search(&board);

        assert_eq!(first, second);
        assert_eq!(first_visits, search.move_visits());
    }

    #[test]
    fn test_parallel_expansion_matches_sequential() {
        let board = MetaBoard::new();
        let config = MCTSConfig::default().with_seed(9).with_iterations(150);

        let mut sequential = MCTSSearch::new(config.clone());
        let mut parallel = MCTSSearch::new(config.with_parallel_expansion(true));

        assert_eq!(sequential.search(&board), parallel.search(&board));
        assert_eq!(sequential.move_visits(), parallel.move_visits());
    }

    #[test]
    fn test_move_visits_follow_legal_order() {
        let mut board = MetaBoard::new();
        board.make_move(40).unwrap();
        let mut search = MCTSSearch::new(MCTSConfig::default().with_iterations(60));
        search.search(&board);

        let moves: Vec<usize> = search.move_visits().into_iter().map(|(mv, _)| mv).collect();
        assert_eq!(moves, board.legal_moves().to_vec());
    }

    #[test]
    fn test_single_move_shortcut() {
        // Board 0 is filled except cell 8 and O is sent there.
        let mut board = MetaBoard::new();
        for mv in [0, 1, 2, 4, 3, 5, 7, 6, 72] {
            board.make_move(mv).unwrap();
        }
        assert_eq!(board.legal_moves().as_slice(), &[8]);

        let mut search = MCTSSearch::new(MCTSConfig::default().with_iterations(10));
        assert_eq!(search.search(&board), Some(8));
        assert_eq!(search.stats().iterations, 0);
    }

    #[test]
    fn test_finds_immediate_win() {
        let board = winning_position();
        assert_eq!(board.current_player(), PlayerId::ONE);

        let config = MCTSConfig::default()
            .with_seed(3)
            .with_exploration(0.5)
            .with_iterations(2000);
        let mut search = MCTSSearch::new(config);
        assert_eq!(search.search(&board), Some(20));
    }

    #[test]
    fn test_heuristic_rollout_search() {
        let board = winning_position();
        let rollout = HeuristicRollout::new(WeightedHeuristic::default(), PlayerId::ONE);
        let mut search =
            MCTSSearch::new(MCTSConfig::default().with_iterations(100)).with_rollout(rollout);

        let mv = search.search(&board);
        assert!(mv.is_some_and(|mv| board.legal_moves().contains(&mv)));
        assert_eq!(search.stats().iterations, 100);
        assert!(search.stats().simulations > 0);
    }

    #[test]
    fn test_time_budget_stops() {
        let board = MetaBoard::new();
        let config = MCTSConfig::default().with_budget(SearchBudget::TimeMillis(30));
        let mut search = MCTSSearch::new(config);

        assert!(search.search(&board).is_some());
        assert!(search.stats().iterations > 0);
    }

    #[test]
    fn test_node_limit() {
        let board = MetaBoard::new();
        let config = MCTSConfig::default().with_iterations(10_000).with_max_nodes(500);
        let mut search = MCTSSearch::new(config);
        search.search(&board);

        assert!(search.stats().iterations < 10_000);
        assert!(search.tree().len() >= 500);
    }

    #[test]
    fn test_no_legal_moves() {
        let mut board = MetaBoard::new();
        while let Some(&mv) = board.legal_moves().first() {
            board.make_move(mv).unwrap();
        }
        let mut search = MCTSSearch::new(MCTSConfig::default());
        assert_eq!(search.search(&board), None);
    }
}
