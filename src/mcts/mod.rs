//! Monte Carlo Tree Search (UCT) for ultimate tic-tac-toe.
//!
//! ## Overview
//!
//! - **Arena tree**: nodes live in a flat vector and refer to each other by
//!   `NodeId`; every node owns a cloned `MetaBoard`
//! - **Configurable Policies**: selection (UCT) and rollout (random, greedy
//!   heuristic)
//! - **Budgets**: stop after a number of iterations or a wall-clock limit
//! - **Parallel expansion**: child boards can be built on the rayon pool
//!
//! ## Usage
//!
//! ```rust
//! use ultimate_ttt::board::MetaBoard;
//! use ultimate_ttt::mcts::{MCTSConfig, MCTSSearch};
//!
//! let board = MetaBoard::new();
//! let mut search = MCTSSearch::new(MCTSConfig::default().with_iterations(200));
//!
//! let mv = search.search(&board).expect("empty board has moves");
//! assert!(board.legal_moves().contains(&mv));
//! ```
//!
//! ## Custom Policies
//!
//! ```rust
//! use ultimate_ttt::core::PlayerId;
//! use ultimate_ttt::heuristic::WeightedHeuristic;
//! use ultimate_ttt::mcts::{HeuristicRollout, MCTSConfig, MCTSSearch};
//!
//! let rollout = HeuristicRollout::new(WeightedHeuristic::default(), PlayerId::ONE);
//! let search = MCTSSearch::new(MCTSConfig::default()).with_rollout(rollout);
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::{MCTSConfig, SearchBudget};
pub use node::{MCTSNode, NodeId};
pub use policy::{
    reward, HeuristicRollout, RandomRollout, RolloutPolicy, SelectionPolicy, Uct,
};
pub use search::MCTSSearch;
pub use stats::SearchStats;
pub use tree::{MCTSTree, TreeStats};
