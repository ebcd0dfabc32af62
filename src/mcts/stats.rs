//! Per-search counters for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one MCTS search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Iterations completed.
    pub iterations: u32,

    /// Child nodes created by expansion.
    pub nodes_expanded: u32,

    /// Rollouts played.
    pub simulations: u32,

    /// Iterations whose selected leaf was already a decided game.
    pub terminal_hits: u32,

    /// Deepest node created.
    pub max_depth: u16,

    /// Wall time of the search (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Iterations per second of wall time.
    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.iterations as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Average children created per iteration.
    #[must_use]
    pub fn nodes_per_iteration(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.nodes_expanded as f64 / self.iterations as f64
        }
    }
}
