//! Move-making agents.
//!
//! Every player implements [`Player`]: given the live board it picks one
//! move from `legal_moves()`, applies it with `make_move`, and returns it.

pub mod alphabeta;
pub mod mcts;
pub mod random;

pub use alphabeta::AlphaBetaPlayer;
pub use mcts::MctsPlayer;
pub use random::RandomPlayer;

use crate::board::MetaBoard;
use crate::core::PlayError;

/// An agent that plays one move per call.
pub trait Player: Send {
    /// Apply exactly one legal move to `board` and return it.
    fn play(&mut self, board: &mut MetaBoard) -> Result<usize, PlayError>;

    /// Short display name.
    fn name(&self) -> String;

    /// Human-readable parameter summary for result logs.
    fn params(&self) -> String;
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn play(&mut self, board: &mut MetaBoard) -> Result<usize, PlayError> {
        (**self).play(board)
    }

    fn name(&self) -> String {
        (**self).name()
    }

    fn params(&self) -> String {
        (**self).params()
    }
}

/// Apply `mv` if the engine found one.
fn commit(board: &mut MetaBoard, mv: Option<usize>) -> Result<usize, PlayError> {
    let mv = mv.ok_or(PlayError::NoLegalMoves)?;
    board.make_move(mv)?;
    Ok(mv)
}
