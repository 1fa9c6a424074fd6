//! Player and computer choices.
//!
//! `Choice` covers the three hands plus the `None` sentinel used while no
//! round has been played (or after a reset). Only concrete hands are ever
//! handed to the engine; passing `None` there is a programming error.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A hand in Rock-Paper-Scissors, or the unselected sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
    /// Nothing selected yet.
    #[default]
    None,
}

impl Choice {
    /// The three playable hands, in display order.
    pub const HANDS: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Is this one of the three playable hands?
    #[must_use]
    pub const fn is_concrete(self) -> bool {
        !matches!(self, Choice::None)
    }

    /// The hand this one defeats. `None` for the sentinel.
    ///
    /// ```
    /// use rust_rps::core::Choice;
    ///
    /// assert_eq!(Choice::Rock.beats(), Some(Choice::Scissors));
    /// assert_eq!(Choice::Scissors.beats(), Some(Choice::Paper));
    /// assert_eq!(Choice::Paper.beats(), Some(Choice::Rock));
    /// assert_eq!(Choice::None.beats(), None);
    /// ```
    #[must_use]
    pub const fn beats(self) -> Option<Choice> {
        match self {
            Choice::Rock => Some(Choice::Scissors),
            Choice::Scissors => Some(Choice::Paper),
            Choice::Paper => Some(Choice::Rock),
            Choice::None => None,
        }
    }

    /// Human-readable label. Empty for the sentinel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
            Choice::None => "",
        }
    }

    /// Terminal glyph shown on the selection controls.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Choice::Rock => "✊",
            Choice::Paper => "✋",
            Choice::Scissors => "✌",
            Choice::None => " ",
        }
    }

    /// Index into [`Choice::HANDS`].
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Choice::Rock => Some(0),
            Choice::Paper => Some(1),
            Choice::Scissors => Some(2),
            Choice::None => None,
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Text that does not name a hand.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown choice {0:?}, expected rock, paper or scissors")]
pub struct ParseChoiceError(pub String);

impl FromStr for Choice {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Choice::Rock),
            "paper" | "p" => Ok(Choice::Paper),
            "scissors" | "s" => Ok(Choice::Scissors),
            _ => Err(ParseChoiceError(s.to_string())),
        }
    }
}
