//! Game summaries and result sinks.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Status;
use crate::core::PlayerId;

/// Summary of one finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub player_one_name: String,
    pub player_two_name: String,
    pub winner: Status,
    pub player_one_moves: u32,
    pub player_two_moves: u32,
    pub player_one_params: String,
    pub player_two_params: String,
    pub player_one_avg_ms: u64,
    pub player_two_avg_ms: u64,
}

impl Stats {
    /// Name of the winning player, `None` for a draw or unfinished game.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        match self.winner.winner()? {
            PlayerId::ONE => Some(&self.player_one_name),
            _ => Some(&self.player_two_name),
        }
    }
}

/// Destination for finished games.
pub trait ResultSink {
    /// Record the result of game number `game_number`.
    fn record_result(&mut self, game_number: u32, stats: &Stats);
}

/// In-memory result sink.
#[derive(Clone, Debug, Default)]
pub struct ResultLog {
    entries: Vec<(u32, Stats)>,
}

/// Win counts over a [`ResultLog`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    /// Wins keyed by player name.
    pub wins: FxHashMap<String, u32>,

    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Wins for `name`, 0 if it never won.
    #[must_use]
    pub fn wins_for(&self, name: &str) -> u32 {
        self.wins.get(name).copied().unwrap_or(0)
    }
}

impl ResultLog {
    /// Empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded games in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[(u32, Stats)] {
        &self.entries
    }

    /// Number of recorded games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count wins by player name and draws.
    ///
    /// Names are used rather than seats, so a player alternating between
    /// `X` and `O` accumulates into one entry.
    #[must_use]
    pub fn tally(&self) -> Tally {
        let mut tally = Tally::default();
        for (_, stats) in &self.entries {
            match stats.winner_name() {
                Some(name) => *tally.wins.entry(name.to_string()).or_default() += 1,
                None => tally.draws += 1,
            }
        }
        tally
    }
}

impl ResultSink for ResultLog {
    fn record_result(&mut self, game_number: u32, stats: &Stats) {
        debug!(game_number, winner = %stats.winner, "recording result");
        self.entries.push((game_number, stats.clone()));
    }
}
