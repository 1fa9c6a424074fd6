//! Game engine: outcome rules and the computer's draw.
//!
//! The engine is pure apart from drawing from a `ChoiceSource`. It never
//! touches score or display state; the controller applies its results.

pub mod source;
pub mod resolver;

pub use source::{ChoiceSource, ScriptedSource};
pub use resolver::{determine_outcome, resolve_round, GameEngine};
