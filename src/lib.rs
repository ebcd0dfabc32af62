//! # ultimate-ttt
//!
//! An ultimate (meta) tic-tac-toe engine with alpha-beta and MCTS players.
//!
//! Nine local 3x3 boards sit in a 3x3 grid. The cell a player marks picks the
//! local board the opponent must play in next; winning three local boards in
//! a line wins the game.
//!
//! ## Design Principles
//!
//! 1. **Packed boards**: each local board is two 9-bit masks laid out as a
//!    ring around the center, so symmetry transforms are bit rotations.
//!
//! 2. **Value semantics**: `MetaBoard` is a small `Clone` value. Searches
//!    explore futures on independent copies and share nothing.
//!
//! 3. **Deterministic search**: all randomness flows from seeded, forkable
//!    `GameRng`s, so a fixed seed and iteration budget reproduce a search.
//!
//! ## Modules
//!
//! - `core`: player IDs, errors, RNG
//! - `board`: local boards, the meta-board, statuses
//! - `heuristic`: position evaluators
//! - `search`: alpha-beta minimax with parallel root fan-out
//! - `mcts`: Monte Carlo Tree Search (UCT)
//! - `players`: the `Player` trait and engine-backed players
//! - `game`: match driver and result logging

pub mod board;
pub mod core;
pub mod game;
pub mod heuristic;
pub mod mcts;
pub mod players;
pub mod search;

// Re-export commonly used types
pub use crate::core::{BoardError, GameRng, PlayError, PlayerId};

pub use crate::board::{LocalBoard, MetaBoard, Status};

pub use crate::heuristic::{
    Heuristic, HeuristicWeights, PlayoutHeuristic, Score, WeightedHeuristic, LOSS_SCORE, WIN_SCORE,
};

pub use crate::search::{AlphaBetaConfig, AlphaBetaSearch};

pub use crate::mcts::{
    HeuristicRollout, MCTSConfig, MCTSSearch, RandomRollout, RolloutPolicy, SearchBudget,
    SearchStats, SelectionPolicy, Uct,
};

pub use crate::players::{AlphaBetaPlayer, MctsPlayer, Player, RandomPlayer};

pub use crate::game::{Match, ResultLog, ResultSink, Stats};
