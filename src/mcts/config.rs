//! MCTS configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// When the search stops launching iterations.
///
/// A started iteration always runs to completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchBudget {
    /// Run exactly this many iterations.
    Iterations(u32),
    /// Launch iterations until this many milliseconds have passed.
    TimeMillis(u64),
}

impl SearchBudget {
    /// True if another iteration may start.
    #[must_use]
    pub fn allows(&self, iterations: u32, elapsed: Duration) -> bool {
        match *self {
            SearchBudget::Iterations(limit) => iterations < limit,
            SearchBudget::TimeMillis(ms) => elapsed < Duration::from_millis(ms),
        }
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        SearchBudget::Iterations(1000)
    }
}

/// MCTS configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSConfig {
    /// UCT exploration constant (default: sqrt(2) = 1.414).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Random seed for the search RNG.
    /// Same seed and an iteration budget produce deterministic searches.
    pub seed: u64,

    /// Stopping policy.
    pub budget: SearchBudget,

    /// Build child boards on the rayon pool during expansion.
    pub parallel_expansion: bool,

    /// Maximum nodes to allocate in the tree.
    /// Prevents memory exhaustion on long time budgets.
    pub max_nodes: usize,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self {
            exploration_constant: std::f64::consts::SQRT_2,
            seed: 42,
            budget: SearchBudget::default(),
            parallel_expansion: false,
            max_nodes: 500_000,
        }
    }
}

impl MCTSConfig {
    /// Create a new config with custom exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom budget.
    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Shorthand for an iteration budget.
    pub fn with_iterations(self, iterations: u32) -> Self {
        self.with_budget(SearchBudget::Iterations(iterations))
    }

    /// Shorthand for a wall-clock budget.
    pub fn with_time_millis(self, ms: u64) -> Self {
        self.with_budget(SearchBudget::TimeMillis(ms))
    }

    /// Enable or disable parallel expansion.
    pub fn with_parallel_expansion(mut self, parallel: bool) -> Self {
        self.parallel_expansion = parallel;
        self
    }

    /// Create a new config with a custom node limit.
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MCTSConfig::default();
        assert!((config.exploration_constant - std::f64::consts::SQRT_2).abs() < 0.001);
        assert_eq!(config.seed, 42);
        assert_eq!(config.budget, SearchBudget::Iterations(1000));
        assert!(!config.parallel_expansion);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MCTSConfig::default()
            .with_exploration(2.0)
            .with_seed(123)
            .with_time_millis(50)
            .with_parallel_expansion(true);

        assert_eq!(config.exploration_constant, 2.0);
        assert_eq!(config.seed, 123);
        assert_eq!(config.budget, SearchBudget::TimeMillis(50));
        assert!(config.parallel_expansion);
    }

    #[test]
    fn test_budget_allows() {
        let iterations = SearchBudget::Iterations(3);
        assert!(iterations.allows(2, Duration::from_secs(100)));
        assert!(!iterations.allows(3, Duration::ZERO));

        let time = SearchBudget::TimeMillis(10);
        assert!(time.allows(1_000_000, Duration::from_millis(9)));
        assert!(!time.allows(0, Duration::from_millis(10)));
    }

    #[test]
    fn test_serialization() {
        let config = MCTSConfig::default().with_iterations(250);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MCTSConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.seed, deserialized.seed);
        assert_eq!(deserialized.budget, SearchBudget::Iterations(250));
    }
}
