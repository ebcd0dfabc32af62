//! Line patterns shared by local boards and the meta-grid.
//!
//! Indices are row-major ("human") cell indices:
//!
//! ```text
//!  0 | 1 | 2
//!  3 | 4 | 5
//!  6 | 7 | 8
//! ```

/// The eight winning triples: rows, then columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Every two-cell fragment of a winning triple, in `LINES` order.
///
/// Each triple `[a, b, c]` contributes `[a, b]`, `[a, c]`, `[b, c]`.
pub const FRAGMENTS: [[usize; 2]; 24] = {
    let mut out = [[0; 2]; 24];
    let mut i = 0;
    while i < LINES.len() {
        let line = LINES[i];
        out[i * 3] = [line[0], line[1]];
        out[i * 3 + 1] = [line[0], line[2]];
        out[i * 3 + 2] = [line[1], line[2]];
        i += 1;
    }
    out
};

/// The center cell of any 3x3 grid.
pub const CENTER: usize = 4;
