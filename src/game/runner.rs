//! Drives two players through one game.

use std::time::{Duration, Instant};

use tracing::{info, trace};

use super::log::Stats;
use crate::board::{MetaBoard, Status};
use crate::core::PlayError;
use crate::players::Player;

/// Per-side move counter and think time.
#[derive(Clone, Copy, Debug, Default)]
struct Clock {
    moves: u32,
    elapsed: Duration,
}

impl Clock {
    fn avg_ms(&self) -> u64 {
        if self.moves == 0 {
            0
        } else {
            (self.elapsed.as_millis() / u128::from(self.moves)) as u64
        }
    }
}

/// One game between two players. `one` moves first (`X`).
pub struct Match<A: Player, B: Player> {
    one: A,
    two: B,
    board: MetaBoard,
    clocks: [Clock; 2],
}

impl<A: Player, B: Player> Match<A, B> {
    /// New game from the empty board.
    pub fn new(one: A, two: B) -> Self {
        Self::with_board(one, two, MetaBoard::new())
    }

    /// New game from an existing position. The side to move is taken from
    /// the board.
    pub fn with_board(one: A, two: B, board: MetaBoard) -> Self {
        Self {
            one,
            two,
            board,
            clocks: [Clock::default(); 2],
        }
    }

    /// Alternate `play` calls until the game is decided.
    ///
    /// Returns the final status.
    pub fn run(&mut self) -> Result<Status, PlayError> {
        let mut status = self.board.winner();
        while !status.is_decided() {
            let side = self.board.current_player().index();
            let start = Instant::now();
            let mv = if side == 0 {
                self.one.play(&mut self.board)?
            } else {
                self.two.play(&mut self.board)?
            };
            let clock = &mut self.clocks[side];
            clock.elapsed += start.elapsed();
            clock.moves += 1;

            trace!(side, mv, "move played");
            status = self.board.winner();
        }

        info!(
            one = %self.one.name(),
            two = %self.two.name(),
            result = %status,
            "game finished"
        );
        Ok(status)
    }

    /// Current position.
    #[must_use]
    pub fn board(&self) -> &MetaBoard {
        &self.board
    }

    /// Summary of the game so far.
    #[must_use]
    pub fn stats(&self) -> Stats {
        let [one, two] = self.clocks;
        Stats {
            player_one_name: self.one.name(),
            player_two_name: self.two.name(),
            winner: self.board.winner(),
            player_one_moves: one.moves,
            player_two_moves: two.moves,
            player_one_params: self.one.params(),
            player_two_params: self.two.params(),
            player_one_avg_ms: one.avg_ms(),
            player_two_avg_ms: two.avg_ms(),
        }
    }
}
