//! Session: one controller plus its reveal drivers on a tokio runtime.
//!
//! The session is the only actor mutating the controller from the outside.
//! Each `play` spawns a driver for the new reveal on the runtime that was
//! current when the session was created. Older drivers are never cancelled
//! explicitly; they see a stale generation on their next tick and exit.

use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio::runtime::{Handle, TryCurrentError};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::animation::{drive_reveal, RevealTicket};
use crate::controller::{lock, GameController, Observer, SharedController, Snapshot, SubscriptionId};
use crate::core::{Choice, GameRng, SessionConfig};
use crate::engine::ChoiceSource;

/// Errors starting a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("a session needs a running tokio runtime")]
    NoRuntime(#[from] TryCurrentError),
}

/// A running game session.
pub struct Session<S = GameRng> {
    controller: SharedController<S>,
    runtime: Handle,
    config: SessionConfig,
    reveal: Option<JoinHandle<()>>,
}

impl Session<GameRng> {
    /// Session over a `GameRng` seeded per `config`.
    pub fn from_config(config: SessionConfig) -> Result<Self, SessionError> {
        let runtime = Handle::try_current()?;
        let controller = GameController::from_config(config.clone());
        Ok(Self::with_controller(runtime, config, controller))
    }
}

impl<S: ChoiceSource + Send + 'static> Session<S> {
    /// Session drawing the computer's hands from `source`.
    pub fn new(config: SessionConfig, source: S) -> Result<Self, SessionError> {
        let runtime = Handle::try_current()?;
        let controller = GameController::new(config.clone(), source);
        Ok(Self::with_controller(runtime, config, controller))
    }

    fn with_controller(runtime: Handle, config: SessionConfig, controller: GameController<S>) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
            runtime,
            config,
            reveal: None,
        }
    }

    /// Play a round and start its reveal, superseding any reveal in flight.
    pub fn play(&mut self, choice: Choice) -> RevealTicket {
        let started = Instant::now();
        let ticket = lock(&self.controller).play(choice);
        let driver = drive_reveal(
            Arc::clone(&self.controller),
            ticket,
            started,
            self.config.frame_interval(),
        );
        self.reveal = Some(self.runtime.spawn(driver));
        ticket
    }

    /// Clear the displayed round, keeping the score.
    pub fn reset(&mut self) {
        lock(&self.controller).reset();
    }

    /// Zero the score and round history.
    pub fn reset_score(&mut self) {
        lock(&self.controller).reset_score();
    }

    /// Wait until the latest reveal driver has exited.
    pub async fn settle(&mut self) {
        if let Some(driver) = self.reveal.take() {
            if let Err(err) = driver.await {
                log::warn!("reveal driver failed: {err}");
            }
        }
    }

    pub fn subscribe(&self, observer: Observer) -> SubscriptionId {
        lock(&self.controller).subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        lock(&self.controller).unsubscribe(id)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        lock(&self.controller).snapshot()
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::RoundPhase;
    use crate::core::Score;
    use crate::engine::ScriptedSource;
    use std::time::Duration;
    use tokio::time::sleep;

    fn scripted(script: Vec<Choice>) -> Session<ScriptedSource> {
        Session::new(SessionConfig::default(), ScriptedSource::new(script)).unwrap()
    }

    #[test]
    fn test_requires_runtime() {
        let result = Session::new(SessionConfig::default(), ScriptedSource::new(vec![Choice::Rock]));
        assert!(matches!(result, Err(SessionError::NoRuntime(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveal_completes() {
        let mut session = scripted(vec![Choice::Scissors]);
        session.play(Choice::Rock);
        assert_eq!(session.snapshot().round.animation_progress(), 0.0);

        session.settle().await;

        let snapshot = session.snapshot();
        assert_eq!(snapshot.round.animation_progress(), 1.0);
        assert_eq!(snapshot.banner_opacity(), 1.0);
        assert_eq!(snapshot.score, Score::new(1, 0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_mid_reveal() {
        let mut session = scripted(vec![Choice::Scissors]);
        session.play(Choice::Rock);
        sleep(Duration::from_millis(100)).await;

        session.reset();
        session.settle().await;

        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase(), RoundPhase::Idle);
        assert_eq!(snapshot.round.animation_progress(), 0.0);
        assert_eq!(snapshot.score, Score::new(1, 0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_score() {
        let mut session = scripted(vec![Choice::Paper]);
        session.play(Choice::Scissors);
        session.settle().await;

        session.reset_score();

        assert_eq!(session.snapshot().score, Score::default());
        assert!(session.snapshot().history.is_empty());
    }
}
