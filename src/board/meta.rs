//! The 9x9 meta-board: nine local boards in a 3x3 grid.
//!
//! A move is a global index `0..81`: `board = g / 9`, `cell = g % 9`. The cell
//! played picks the local board the opponent must play in next. If that board
//! is already decided the opponent may play in any running board.
//!
//! `MetaBoard` is a plain value. `clone()` gives a fully independent copy,
//! which is what both search engines rely on when exploring futures.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::lines::{CENTER, FRAGMENTS, LINES};
use super::local::LocalBoard;
use super::status::Status;
use crate::core::{BoardError, PlayerId, Result};

/// Number of local boards, and cells per local board.
pub const BOARDS: usize = 9;

/// Number of global move indices.
pub const MOVES: usize = BOARDS * LocalBoard::CELLS;

/// Legal global moves. Inline up to one full local board.
pub type MoveList = SmallVec<[usize; 9]>;

/// The full game state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMetaBoard")]
pub struct MetaBoard {
    boards: [LocalBoard; BOARDS],
    active_cell: Option<usize>,
    current_player: PlayerId,
}

/// Wire form of a [`MetaBoard`] before the active cell is checked.
#[derive(Deserialize)]
pub struct RawMetaBoard {
    boards: [LocalBoard; BOARDS],
    active_cell: Option<usize>,
    current_player: PlayerId,
}

impl TryFrom<RawMetaBoard> for MetaBoard {
    type Error = BoardError;

    fn try_from(raw: RawMetaBoard) -> Result<Self> {
        if let Some(cell) = raw.active_cell.filter(|&cell| cell >= BOARDS) {
            return Err(BoardError::InvalidCell(cell));
        }
        Ok(Self {
            boards: raw.boards,
            active_cell: raw.active_cell,
            current_player: raw.current_player,
        })
    }
}

impl Default for MetaBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl MetaBoard {
    /// Empty board, `PlayerId::ONE` to move, any board playable.
    #[must_use]
    pub fn new() -> Self {
        Self {
            boards: [LocalBoard::new(); BOARDS],
            active_cell: None,
            current_player: PlayerId::ONE,
        }
    }

    /// The local board at `index`, or `None` if out of range.
    #[must_use]
    pub fn local(&self, index: usize) -> Option<&LocalBoard> {
        self.boards.get(index)
    }

    /// All local boards in row-major order.
    #[must_use]
    pub fn locals(&self) -> &[LocalBoard; BOARDS] {
        &self.boards
    }

    /// The local board the next move is sent to, `None` before the first move.
    #[must_use]
    pub fn active_cell(&self) -> Option<usize> {
        self.active_cell
    }

    /// The player to move.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Status of local board `index`. Out-of-range indices read as `Running`.
    #[must_use]
    pub fn local_status(&self, index: usize) -> Status {
        self.boards.get(index).map_or(Status::Running, LocalBoard::status)
    }

    /// Play global move `global` for the current player.
    ///
    /// Does not check the forced board; take moves from [`legal_moves`].
    /// On error the board is unchanged.
    ///
    /// [`legal_moves`]: MetaBoard::legal_moves
    pub fn make_move(&mut self, global: usize) -> Result<()> {
        if global >= MOVES {
            return Err(BoardError::InvalidMove(global));
        }
        let board = global / LocalBoard::CELLS;
        let cell = global % LocalBoard::CELLS;

        let local = &mut self.boards[board];
        if local.status().is_decided() {
            return Err(BoardError::BoardDecided(board));
        }
        local.set(cell, self.current_player)?;

        self.active_cell = Some(cell);
        self.current_player = self.current_player.opponent();
        Ok(())
    }

    /// Legal global moves in increasing order.
    ///
    /// Restricted to the active board while it is running. Once the active
    /// board is decided (or before the first move) every running board is
    /// open.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();

        if let Some(active) = self.active_cell {
            let local = &self.boards[active];
            if !local.status().is_decided() {
                Self::push_cells(&mut moves, active, local);
                return moves;
            }
        }

        for (index, local) in self.boards.iter().enumerate() {
            if !local.status().is_decided() {
                Self::push_cells(&mut moves, index, local);
            }
        }
        moves
    }

    fn push_cells(moves: &mut MoveList, board: usize, local: &LocalBoard) {
        let base = board * LocalBoard::CELLS;
        moves.extend(local.legal_cells().into_iter().map(|cell| base + cell));
    }

    fn owns_line(&self, player: PlayerId) -> bool {
        let won = Status::won_by(player);
        LINES
            .iter()
            .any(|line| line.iter().all(|&index| self.boards[index].status() == won))
    }

    fn all_decided(&self) -> bool {
        self.boards.iter().all(|local| local.status().is_decided())
    }

    /// Macro outcome checked for one player.
    ///
    /// `player` wins if they own a line of won local boards. Otherwise the
    /// game is a draw once every local board is decided.
    #[must_use]
    pub fn macro_status(&self, player: PlayerId) -> Status {
        if self.owns_line(player) {
            Status::won_by(player)
        } else if self.all_decided() {
            Status::Draw
        } else {
            Status::Running
        }
    }

    /// Overall outcome: the player to move is checked first, then the
    /// opponent, then the draw condition.
    #[must_use]
    pub fn winner(&self) -> Status {
        let player = self.current_player;
        if self.owns_line(player) {
            Status::won_by(player)
        } else if self.owns_line(player.opponent()) {
            Status::won_by(player.opponent())
        } else if self.all_decided() {
            Status::Draw
        } else {
            Status::Running
        }
    }

    /// True once [`MetaBoard::winner`] is no longer `Running`.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner().is_decided()
    }

    /// Macro fragments held by `player` minus those held by the opponent.
    ///
    /// A fragment is two local boards on a common line, both won by the
    /// same side.
    #[must_use]
    pub fn partial_wins_difference(&self, player: PlayerId) -> i32 {
        let statuses: [Status; BOARDS] = std::array::from_fn(|i| self.boards[i].status());
        let own = Status::won_by(player);
        let theirs = Status::won_by(player.opponent());

        FRAGMENTS.iter().fold(0, |acc, &[a, b]| {
            if statuses[a] == own && statuses[b] == own {
                acc + 1
            } else if statuses[a] == theirs && statuses[b] == theirs {
                acc - 1
            } else {
                acc
            }
        })
    }

    /// True if `player` won the center local board.
    #[must_use]
    pub fn holds_center_board(&self, player: PlayerId) -> bool {
        self.boards[CENTER].status().is_winner(player)
    }
}

impl std::fmt::Display for MetaBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for text_row in 0..9 {
            let band = text_row / 3;
            let cells: Vec<String> = (0..3)
                .map(|column| {
                    self.boards[band * 3 + column]
                        .row(text_row % 3)
                        .iter()
                        .map(|owner| owner.map_or('.', PlayerId::symbol).to_string())
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect();
            writeln!(f, "{}", cells.join(" | "))?;
            if text_row == 2 || text_row == 5 {
                writeln!(f, "------+-------+------")?;
            }
        }
        Ok(())
    }
}
