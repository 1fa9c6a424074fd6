//! Core value types: choices, outcomes, score, RNG, configuration.
//!
//! Everything here is plain data. The engine decides rounds with these types
//! and the controller stores them; neither adds behavior to them.

pub mod choice;
pub mod outcome;
pub mod score;
pub mod rng;
pub mod config;

pub use choice::{Choice, ParseChoiceError};
pub use outcome::Outcome;
pub use score::{Score, SessionStats};
pub use rng::{GameRng, GameRngState};
pub use config::SessionConfig;
