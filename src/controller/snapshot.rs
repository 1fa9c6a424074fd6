//! Immutable view of the controller's state.
//!
//! Snapshots are what observers and renderers see. History is an
//! `im::Vector`, so taking a snapshot per animation frame stays O(1)
//! however long the session runs.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::core::{Choice, Outcome, Score, SessionStats};

use super::state::{RoundPhase, RoundState};

/// One resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number within the session (or since the last score reset).
    pub number: u32,
    pub player: Choice,
    pub computer: Choice,
    pub outcome: Outcome,
}

/// Everything a view needs to draw one frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub round: RoundState,
    pub score: Score,
    pub stats: SessionStats,
    /// Animation generation current when the snapshot was taken.
    pub generation: u64,
    pub easing: Easing,
    pub history: Vector<RoundRecord>,
}

impl Snapshot {
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.round.phase()
    }

    /// Outcome text, empty while idle.
    #[must_use]
    pub fn result_text(&self) -> &'static str {
        self.round.outcome().map_or("", Outcome::message)
    }

    /// Eased banner opacity; 0 while idle.
    #[must_use]
    pub fn banner_opacity(&self) -> f32 {
        match self.round.outcome() {
            Some(_) => self.easing.apply(self.round.animation_progress()),
            None => 0.0,
        }
    }

    /// Most recent round, if any.
    #[must_use]
    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.history.last()
    }
}
