//! Round outcomes.

use serde::{Deserialize, Serialize};

/// Result of comparing the player's hand with the computer's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWins,
    ComputerWins,
    Tie,
}

impl Outcome {
    /// Banner text shown when the round is revealed.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Outcome::PlayerWins => "You win!",
            Outcome::ComputerWins => "You lose!",
            Outcome::Tie => "It's a tie!",
        }
    }

    /// The same round seen from the other side of the table.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Outcome::PlayerWins => Outcome::ComputerWins,
            Outcome::ComputerWins => Outcome::PlayerWins,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(Outcome::PlayerWins.message(), "You win!");
        assert_eq!(Outcome::ComputerWins.message(), "You lose!");
        assert_eq!(Outcome::Tie.to_string(), "It's a tie!");
    }

    #[test]
    fn test_reversed() {
        assert_eq!(Outcome::PlayerWins.reversed(), Outcome::ComputerWins);
        assert_eq!(Outcome::ComputerWins.reversed(), Outcome::PlayerWins);
        assert_eq!(Outcome::Tie.reversed(), Outcome::Tie);
    }
}
