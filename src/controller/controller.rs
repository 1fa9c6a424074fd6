//! The presentation controller.

use im::Vector;

use crate::animation::{AnimationTick, RevealTicket};
use crate::core::{Choice, GameRng, Score, SessionConfig, SessionStats};
use crate::engine::{ChoiceSource, GameEngine};

use super::observer::{Observer, Observers, SubscriptionId};
use super::snapshot::{RoundRecord, Snapshot};
use super::state::{RoundPhase, RoundState};

/// Owns the round state, the score and the engine.
///
/// `play` and `reset` are the only round mutators; `advance_animation` only
/// moves reveal progress. Every change is pushed to subscribers.
#[derive(Debug)]
pub struct GameController<S = GameRng> {
    engine: GameEngine<S>,
    config: SessionConfig,
    round: RoundState,
    score: Score,
    stats: SessionStats,
    history: Vector<RoundRecord>,
    generation: u64,
    observers: Observers,
}

impl GameController<GameRng> {
    /// Controller over a `GameRng` seeded from `config.seed`, or from entropy.
    pub fn from_config(config: SessionConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        log::info!("session seed {}", rng.seed());
        Self::new(config, rng)
    }
}

impl<S: ChoiceSource> GameController<S> {
    pub fn new(config: SessionConfig, source: S) -> Self {
        Self {
            engine: GameEngine::new(source),
            config,
            round: RoundState::default(),
            score: Score::default(),
            stats: SessionStats::default(),
            history: Vector::new(),
            generation: 0,
            observers: Observers::new(),
        }
    }

    // === Mutators ===

    /// Play a round with the player's hand.
    ///
    /// Resolves against a fresh draw, applies the outcome to the score and
    /// restarts the reveal at 0. Returns the ticket for the new reveal.
    ///
    /// Panics if `choice` is `Choice::None`.
    pub fn play(&mut self, choice: Choice) -> RevealTicket {
        assert!(choice.is_concrete(), "play requires Rock, Paper or Scissors");

        let (computer, outcome) = self.engine.resolve_round(choice);
        self.round.resolve(choice, computer, outcome);
        self.score.record(outcome);
        self.stats.record(outcome);
        self.history.push_back(RoundRecord {
            number: self.stats.rounds,
            player: choice,
            computer,
            outcome,
        });
        self.generation += 1;

        log::debug!(
            "round {}: {} vs {} -> {:?}, score {}",
            self.stats.rounds,
            choice,
            computer,
            outcome,
            self.score
        );

        self.notify();
        RevealTicket {
            generation: self.generation,
            duration: self.config.reveal_duration(),
        }
    }

    /// Clear the displayed round. Score, stats and history are kept.
    ///
    /// Any reveal still running for the cleared round becomes stale.
    pub fn reset(&mut self) {
        self.round.clear();
        self.generation += 1;
        log::debug!("round display reset, score {}", self.score);
        self.notify();
    }

    /// Zero the score together with stats and history.
    ///
    /// The displayed round is left alone.
    pub fn reset_score(&mut self) {
        self.score = Score::default();
        self.stats = SessionStats::default();
        self.history = Vector::new();
        log::debug!("score reset");
        self.notify();
    }

    /// Apply reveal progress for `generation`.
    ///
    /// Progress is clamped to [0,1] and never moves backwards within a
    /// reveal. Ticks for an old generation, or while idle, are `Stale`.
    pub fn advance_animation(&mut self, generation: u64, progress: f32) -> AnimationTick {
        if generation != self.generation || self.round.is_idle() {
            return AnimationTick::Stale;
        }

        let progress = progress.clamp(0.0, 1.0).max(self.round.animation_progress());
        self.round.set_progress(progress);
        self.notify();

        if progress >= 1.0 {
            AnimationTick::Finished
        } else {
            AnimationTick::Running
        }
    }

    // === Observers ===

    pub fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        self.observers.notify(&snapshot);
    }

    // === Accessors ===

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            round: self.round.clone(),
            score: self.score,
            stats: self.stats,
            generation: self.generation,
            easing: self.config.easing,
            history: self.history.clone(),
        }
    }

    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.round.phase()
    }

    /// Current animation generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine<S> {
        &self.engine
    }
}
