//! Result reveal bookkeeping.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Handed out by `play`: which reveal to drive and for how long.
///
/// The generation identifies the reveal. Once a newer round (or a reset)
/// bumps the controller's generation, ticks carrying this one are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealTicket {
    pub generation: u64,
    pub duration: Duration,
}

/// Controller's answer to an animation tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationTick {
    /// Progress applied, reveal still running.
    Running,
    /// Progress reached 1.
    Finished,
    /// The reveal was superseded; the driver should stop.
    Stale,
}

/// Linear progress of a reveal `elapsed` into `duration`, clamped to [0,1].
///
/// A zero-length reveal is complete immediately.
#[must_use]
pub fn reveal_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() || elapsed >= duration {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()) as f32
}
