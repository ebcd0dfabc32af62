//! Core types: players, errors, RNG.
//!
//! These are shared by the boards, the heuristics, and both search engines.

pub mod error;
pub mod player;
pub mod rng;

pub use error::{BoardError, PlayError, Result};
pub use player::PlayerId;
pub use rng::GameRng;
