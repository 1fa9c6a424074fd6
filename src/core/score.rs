//! Cumulative score and session statistics.
//!
//! ## Score
//!
//! Wins per side. Non-decreasing for the life of a session; only an explicit
//! score reset returns it to zero.
//!
//! ## SessionStats
//!
//! Rounds played and ties, so that
//! `score.player + score.computer + stats.ties == stats.rounds` can be checked.

use serde::{Deserialize, Serialize};

use super::Outcome;

/// Wins per side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub computer: u32,
}

impl Score {
    #[must_use]
    pub const fn new(player: u32, computer: u32) -> Self {
        Self { player, computer }
    }

    /// Apply one resolved round. A tie leaves the score untouched.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWins => self.player += 1,
            Outcome::ComputerWins => self.computer += 1,
            Outcome::Tie => {}
        }
    }

    /// Total decisive rounds.
    #[must_use]
    pub const fn decided(&self) -> u32 {
        self.player + self.computer
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {}", self.player, self.computer)
    }
}

/// Round counters kept alongside the score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Resolved rounds, ties included.
    pub rounds: u32,
    pub ties: u32,
}

impl SessionStats {
    pub fn record(&mut self, outcome: Outcome) {
        self.rounds += 1;
        if outcome == Outcome::Tie {
            self.ties += 1;
        }
    }
}
