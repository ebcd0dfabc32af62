//! Packed 3x3 board.
//!
//! ## Layout
//!
//! Each player owns a 9-bit occupancy mask. Bits are laid out as a clockwise
//! ring around the center, so that quarter turns are plain 8-bit rotations:
//!
//! ```text
//!  bit layout      human layout
//!  0 | 1 | 2       0 | 1 | 2
//!  7 | 8 | 3       3 | 4 | 5
//!  6 | 5 | 4       6 | 7 | 8
//! ```
//!
//! All public methods take human (row-major) indices and translate through
//! [`HUMAN_TO_BIT`] / [`BIT_TO_HUMAN`].
//!
//! ## Encoding
//!
//! Debug boards use an 11 character string: three rows of `X`, `O` or `_`
//! separated by single spaces, e.g. `"XOX _X_ __O"`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::lines::{CENTER, FRAGMENTS, LINES};
use super::status::Status;
use crate::core::{BoardError, PlayerId, Result};

/// Human index -> bit index.
pub const HUMAN_TO_BIT: [u8; 9] = [0, 1, 2, 7, 8, 3, 6, 5, 4];

/// Bit index -> human index.
pub const BIT_TO_HUMAN: [u8; 9] = [0, 1, 2, 5, 8, 7, 6, 3, 4];

/// Length of the debug encoding.
pub const ENCODING_LEN: usize = 11;

/// Empty cells of a single board, at most nine.
pub type CellList = SmallVec<[usize; 9]>;

const FULL: u16 = 0b1_1111_1111;
const RING: u16 = 0b0_1111_1111;
const CENTER_BIT: u16 = 1 << 8;

/// Swaps the top and bottom rows (bit i moves to `FLIP_HORIZONTAL[i]`).
const FLIP_HORIZONTAL: [u8; 9] = [6, 5, 4, 3, 2, 1, 0, 7, 8];

const fn cells_to_mask(cells: &[usize]) -> u16 {
    let mut mask = 0u16;
    let mut i = 0;
    while i < cells.len() {
        mask |= 1u16 << HUMAN_TO_BIT[cells[i]];
        i += 1;
    }
    mask
}

/// Winning triples in bit layout.
const LINE_MASKS: [u16; 8] = {
    let mut out = [0; 8];
    let mut i = 0;
    while i < LINES.len() {
        out[i] = cells_to_mask(&LINES[i]);
        i += 1;
    }
    out
};

/// Two-cell fragments in bit layout.
const FRAGMENT_MASKS: [u16; 24] = {
    let mut out = [0; 24];
    let mut i = 0;
    while i < FRAGMENTS.len() {
        out[i] = cells_to_mask(&FRAGMENTS[i]);
        i += 1;
    }
    out
};

#[inline]
const fn cell_bit(cell: usize) -> u16 {
    1u16 << HUMAN_TO_BIT[cell]
}

fn permute(mask: u16, table: &[u8; 9]) -> u16 {
    (0..9)
        .filter(|&bit| mask & (1u16 << bit) != 0)
        .fold(0u16, |acc, bit| acc | (1u16 << table[bit]))
}

fn rotate_mask(mask: u16, quarter_turns: u32) -> u16 {
    let ring = (mask & RING) as u8;
    let rotated = ring.rotate_left(2 * (quarter_turns % 4));
    (mask & CENTER_BIT) | u16::from(rotated)
}

/// A single 3x3 tic-tac-toe board.
///
/// Deserialization goes through [`RawLocalBoard`] and rejects masks that
/// overlap or use bits above the ninth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLocalBoard")]
pub struct LocalBoard {
    masks: [u16; 2],
}

/// Unchecked wire form of a [`LocalBoard`].
#[derive(Deserialize)]
pub struct RawLocalBoard {
    masks: [u16; 2],
}

impl TryFrom<RawLocalBoard> for LocalBoard {
    type Error = BoardError;

    fn try_from(raw: RawLocalBoard) -> Result<Self> {
        let [one, two] = raw.masks;
        if (one | two) & !FULL != 0 || one & two != 0 {
            return Err(BoardError::InvalidMasks(one, two));
        }
        Ok(Self { masks: raw.masks })
    }
}

impl LocalBoard {
    /// Number of cells.
    pub const CELLS: usize = 9;

    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self { masks: [0; 2] }
    }

    /// Raw occupancy mask of a player, in bit layout.
    #[inline]
    #[must_use]
    pub fn mask(&self, player: PlayerId) -> u16 {
        self.masks[player.index()]
    }

    /// Union of both players' masks.
    #[inline]
    #[must_use]
    pub fn occupied(&self) -> u16 {
        self.masks[0] | self.masks[1]
    }

    /// Mark `cell` for `player`.
    ///
    /// Fails on an out-of-range cell or a cell either player already holds.
    pub fn set(&mut self, cell: usize, player: PlayerId) -> Result<()> {
        if cell >= Self::CELLS {
            return Err(BoardError::InvalidCell(cell));
        }
        let bit = cell_bit(cell);
        if self.occupied() & bit != 0 {
            return Err(BoardError::CellOccupied(cell));
        }
        self.masks[player.index()] |= bit;
        Ok(())
    }

    /// The player holding `cell`, or `None` if it is empty or out of range.
    #[must_use]
    pub fn owner(&self, cell: usize) -> Option<PlayerId> {
        if cell >= Self::CELLS {
            return None;
        }
        let bit = cell_bit(cell);
        PlayerId::BOTH
            .into_iter()
            .find(|&player| self.masks[player.index()] & bit != 0)
    }

    /// Win, draw or still running.
    ///
    /// Lines are checked before fullness, so a line completed with the last
    /// empty cell counts as a win.
    #[must_use]
    pub fn status(&self) -> Status {
        for player in PlayerId::BOTH {
            if Self::has_line(self.masks[player.index()]) {
                return Status::won_by(player);
            }
        }
        if self.occupied() == FULL {
            Status::Draw
        } else {
            Status::Running
        }
    }

    fn has_line(mask: u16) -> bool {
        LINE_MASKS.iter().any(|&line| mask & line == line)
    }

    /// Empty cells in increasing human order.
    #[must_use]
    pub fn legal_cells(&self) -> CellList {
        let occupied = self.occupied();
        (0..Self::CELLS)
            .filter(|&cell| occupied & cell_bit(cell) == 0)
            .collect()
    }

    /// Number of cells a player holds.
    #[must_use]
    pub fn mark_count(&self, player: PlayerId) -> u32 {
        self.masks[player.index()].count_ones()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> u32 {
        self.occupied().count_ones()
    }

    /// Signed index of the first two-cell fragment owned by either player.
    ///
    /// Scans [`FRAGMENTS`] in order and stops at the first fragment fully held
    /// by one side: `+index` if that side is `player`, `-index` otherwise.
    /// Returns 0 when no fragment is held. This is a position marker, not a
    /// count; the heuristic weights are tuned against it.
    #[must_use]
    pub fn partial_line_score(&self, player: PlayerId) -> i32 {
        let own = self.masks[player.index()];
        let theirs = self.masks[player.opponent().index()];

        for (index, &fragment) in FRAGMENT_MASKS.iter().enumerate() {
            if own & fragment == fragment {
                return index as i32;
            }
            if theirs & fragment == fragment {
                return -(index as i32);
            }
        }
        0
    }

    /// Rotate clockwise by `quarter_turns` (taken mod 4).
    pub fn rotate(&mut self, quarter_turns: u32) {
        for mask in &mut self.masks {
            *mask = rotate_mask(*mask, quarter_turns);
        }
    }

    /// Mirror across the horizontal axis (top row <-> bottom row).
    pub fn flip_horizontal(&mut self) {
        for mask in &mut self.masks {
            *mask = permute(*mask, &FLIP_HORIZONTAL);
        }
    }

    /// Mirror across the vertical axis (left column <-> right column).
    pub fn flip_vertical(&mut self) {
        self.flip_horizontal();
        self.rotate(2);
    }

    /// All eight dihedral images: each rotation followed by its mirror.
    #[must_use]
    pub fn transforms(&self) -> [LocalBoard; 8] {
        let mut out = [*self; 8];
        for turns in 0..4 {
            let mut rotated = *self;
            rotated.rotate(turns);
            let mut mirrored = rotated;
            mirrored.flip_horizontal();
            out[turns as usize * 2] = rotated;
            out[turns as usize * 2 + 1] = mirrored;
        }
        out
    }

    /// True if some dihedral transform of `a` equals `b` for both players.
    #[must_use]
    pub fn are_symmetric(a: &LocalBoard, b: &LocalBoard) -> bool {
        a.transforms().iter().any(|image| image == b)
    }

    /// Method form of [`LocalBoard::are_symmetric`].
    #[must_use]
    pub fn is_symmetric_to(&self, other: &LocalBoard) -> bool {
        Self::are_symmetric(self, other)
    }

    /// Legal cells for `player` with symmetric duplicates removed.
    ///
    /// A cell is dropped when marking it gives a board symmetric to the
    /// result of an earlier kept cell.
    #[must_use]
    pub fn symmetric_legal_cells(&self, player: PlayerId) -> CellList {
        let mut kept = CellList::new();
        let mut images: SmallVec<[LocalBoard; 9]> = SmallVec::new();

        for cell in self.legal_cells() {
            let mut next = *self;
            next.masks[player.index()] |= cell_bit(cell);
            if images.iter().any(|image| Self::are_symmetric(image, &next)) {
                continue;
            }
            images.push(next);
            kept.push(cell);
        }
        kept
    }

    /// Owners of the three cells in `row` (0-2).
    #[must_use]
    pub fn row(&self, row: usize) -> [Option<PlayerId>; 3] {
        let base = row * 3;
        [self.owner(base), self.owner(base + 1), self.owner(base + 2)]
    }

    /// True if `player` holds the center cell.
    #[must_use]
    pub fn holds_center(&self, player: PlayerId) -> bool {
        self.owner(CENTER) == Some(player)
    }
}

impl FromStr for LocalBoard {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || BoardError::InvalidEncoding(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != ENCODING_LEN {
            return Err(invalid());
        }

        let mut board = LocalBoard::new();
        let mut cell = 0;
        for (i, &byte) in bytes.iter().enumerate() {
            if i == 3 || i == 7 {
                if byte != b' ' {
                    return Err(invalid());
                }
                continue;
            }
            match byte {
                b'X' => board.set(cell, PlayerId::ONE)?,
                b'O' => board.set(cell, PlayerId::TWO)?,
                b'_' => {}
                _ => return Err(invalid()),
            }
            cell += 1;
        }
        Ok(board)
    }
}

impl std::fmt::Display for LocalBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Write;

        for cell in 0..Self::CELLS {
            let symbol = self.owner(cell).map_or('_', PlayerId::symbol);
            f.write_char(symbol)?;
            if cell == 2 || cell == 5 {
                f.write_char(' ')?;
            }
        }
        Ok(())
    }
}
