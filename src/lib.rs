//! # rust-rps
//!
//! Rock-Paper-Scissors against the computer: a pure game engine, a
//! presentation controller that owns everything the screen shows, and a
//! terminal front end.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Outcomes are a function of the two hands. The only
//!    impurity is the computer's draw, which goes through an injectable
//!    `ChoiceSource`.
//!
//! 2. **Single Owner**: `GameController` owns round state and score.
//!    `play` and `reset` are its only round mutators; views subscribe to
//!    snapshots instead of reading shared state.
//!
//! 3. **Generation-Keyed Animation**: Each reveal carries the generation it
//!    was started for. A newer `play` supersedes it without cancellation.
//!
//! ## Modules
//!
//! - `core`: Choices, outcomes, score, RNG, configuration
//! - `engine`: Outcome rules and the computer's draw
//! - `controller`: Round state, observers, snapshots
//! - `animation`: Easing, reveal progress and the async driver
//! - `session`: Controller plus drivers on a tokio runtime
//! - `ui`: Terminal rendering and controls (`cli` feature)

pub mod core;
pub mod engine;
pub mod controller;
pub mod animation;
pub mod session;
#[cfg(feature = "cli")]
pub mod ui;

// Re-export commonly used types
pub use crate::core::{
    Choice, ParseChoiceError, Outcome, Score, SessionStats,
    GameRng, GameRngState, SessionConfig,
};

pub use crate::engine::{ChoiceSource, ScriptedSource, GameEngine, determine_outcome, resolve_round};

pub use crate::controller::{
    GameController, RoundPhase, RoundState, RoundRecord, Snapshot,
    Observer, SubscriptionId,
};

pub use crate::animation::{Easing, RevealTicket, AnimationTick};

pub use crate::session::{Session, SessionError};
