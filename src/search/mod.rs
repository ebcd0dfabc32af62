//! Minimax search.

pub mod alphabeta;

pub use alphabeta::{AlphaBetaConfig, AlphaBetaSearch, INFINITY};
