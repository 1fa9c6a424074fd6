//! Asynchronous reveal driver.
//!
//! One driver task is spawned per `play`. It ticks the shared controller
//! every frame and once more exactly at the deadline, then exits. A driver
//! whose generation has been superseded is told `Stale` on its next tick and
//! exits without writing anything.

use std::time::Duration;
use tokio::time::Instant;

use crate::controller::{lock, SharedController};
use crate::engine::ChoiceSource;

use super::reveal::{reveal_progress, AnimationTick, RevealTicket};

/// Drive a reveal from 0 to 1, starting at `started`.
pub async fn drive_reveal<S: ChoiceSource>(
    controller: SharedController<S>,
    ticket: RevealTicket,
    started: Instant,
    frame: Duration,
) {
    let deadline = started + ticket.duration;
    let frame = frame.max(Duration::from_millis(1));

    loop {
        let progress = reveal_progress(started.elapsed(), ticket.duration);
        let tick = lock(&controller).advance_animation(ticket.generation, progress);

        match tick {
            AnimationTick::Running => {}
            AnimationTick::Finished => {
                log::trace!("reveal {} finished", ticket.generation);
                return;
            }
            AnimationTick::Stale => {
                log::trace!("reveal {} superseded", ticket.generation);
                return;
            }
        }

        let next = (Instant::now() + frame).min(deadline);
        tokio::time::sleep_until(next).await;
    }
}
