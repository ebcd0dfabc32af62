use super::{commit, Player};
use crate::board::MetaBoard;
use crate::core::{GameRng, PlayError};

/// Plays a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    /// Create a seeded random player.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }
}

impl Player for RandomPlayer {
    fn play(&mut self, board: &mut MetaBoard) -> Result<usize, PlayError> {
        let moves = board.legal_moves();
        let mv = self.rng.choose(&moves).copied();
        commit(board, mv)
    }

    fn name(&self) -> String {
        "Random".to_string()
    }

    fn params(&self) -> String {
        format!("seed={}", self.rng.seed())
    }
}
