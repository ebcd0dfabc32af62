//! Board representation.
//!
//! - [`LocalBoard`]: one packed 3x3 grid with symmetry and line detection
//! - [`MetaBoard`]: nine local boards plus the forced-board rule
//! - [`Status`]: outcome of either

pub mod lines;
pub mod local;
pub mod meta;
pub mod status;

pub use local::{CellList, LocalBoard};
pub use meta::{MetaBoard, MoveList, MOVES};
pub use status::Status;
