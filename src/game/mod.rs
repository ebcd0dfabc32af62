//! Playing full games and recording their results.

pub mod log;
pub mod runner;

pub use log::{ResultLog, ResultSink, Stats, Tally};
pub use runner::Match;
