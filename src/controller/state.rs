//! Round display state.
//!
//! ## Invariant
//!
//! Both choices are `None` (Idle) or both are concrete with an outcome set
//! (Resolved). The fields are private and only the controller mutates them,
//! so a mixed state cannot be built.

use serde::{Deserialize, Serialize};

use crate::core::{Choice, Outcome};

/// Where the round state machine is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Nothing played since start or the last reset.
    Idle,
    /// Both hands shown, outcome decided.
    Resolved,
}

/// What the view shows for the current round.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    player_choice: Choice,
    computer_choice: Choice,
    outcome: Option<Outcome>,
    animation_progress: f32,
}

impl RoundState {
    #[must_use]
    pub fn player_choice(&self) -> Choice {
        self.player_choice
    }

    #[must_use]
    pub fn computer_choice(&self) -> Choice {
        self.computer_choice
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Linear reveal progress in [0,1].
    #[must_use]
    pub fn animation_progress(&self) -> f32 {
        self.animation_progress
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        if self.outcome.is_some() {
            RoundPhase::Resolved
        } else {
            RoundPhase::Idle
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase() == RoundPhase::Idle
    }

    /// Show a freshly resolved round, restarting the reveal at 0.
    pub(crate) fn resolve(&mut self, player: Choice, computer: Choice, outcome: Outcome) {
        debug_assert!(player.is_concrete() && computer.is_concrete());
        self.player_choice = player;
        self.computer_choice = computer;
        self.outcome = Some(outcome);
        self.animation_progress = 0.0;
    }

    /// Back to Idle.
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn set_progress(&mut self, progress: f32) {
        self.animation_progress = progress;
    }
}
