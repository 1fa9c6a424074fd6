//! Sources for the computer's choice.
//!
//! The engine never calls a global RNG. It draws through `ChoiceSource`,
//! so sessions can be seeded and tests can script exact sequences.

use crate::core::{Choice, GameRng};

/// Where the computer's hand comes from.
///
/// ## Implementation Notes
///
/// - `draw` must return a concrete hand, never `Choice::None`
/// - Draws must not depend on the player's hand
pub trait ChoiceSource {
    /// Draw the computer's next hand.
    fn draw(&mut self) -> Choice;
}

impl ChoiceSource for GameRng {
    /// Uniform over the three hands.
    fn draw(&mut self) -> Choice {
        Choice::HANDS[self.gen_index(Choice::HANDS.len())]
    }
}

impl<S: ChoiceSource + ?Sized> ChoiceSource for Box<S> {
    fn draw(&mut self) -> Choice {
        (**self).draw()
    }
}

/// Replays a fixed sequence of hands, wrapping around at the end.
///
/// ```
/// use rust_rps::core::Choice;
/// use rust_rps::engine::{ChoiceSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new(vec![Choice::Rock, Choice::Paper]);
/// assert_eq!(source.draw(), Choice::Rock);
/// assert_eq!(source.draw(), Choice::Paper);
/// assert_eq!(source.draw(), Choice::Rock);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    script: Vec<Choice>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source from a non-empty list of concrete hands.
    pub fn new(script: Vec<Choice>) -> Self {
        assert!(!script.is_empty(), "Script must contain at least one hand");
        assert!(
            script.iter().all(|c| c.is_concrete()),
            "Script may only contain Rock, Paper or Scissors"
        );
        Self { script, cursor: 0 }
    }

    /// Number of draws made so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl ChoiceSource for ScriptedSource {
    fn draw(&mut self) -> Choice {
        let choice = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        choice
    }
}
