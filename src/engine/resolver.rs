//! Round resolution.

use crate::core::{Choice, Outcome};

use super::source::ChoiceSource;

/// Decide a round between two concrete hands.
///
/// Precedence: equal hands tie; otherwise the player wins if their hand
/// beats the computer's; otherwise the computer wins.
///
/// Panics if either hand is `Choice::None`.
#[must_use]
pub fn determine_outcome(player: Choice, computer: Choice) -> Outcome {
    assert!(player.is_concrete(), "Player choice must be Rock, Paper or Scissors");
    assert!(computer.is_concrete(), "Computer choice must be Rock, Paper or Scissors");

    if player == computer {
        Outcome::Tie
    } else if player.beats() == Some(computer) {
        Outcome::PlayerWins
    } else {
        Outcome::ComputerWins
    }
}

/// Draw the computer's hand from `source` and decide the round.
///
/// Returns `(computer, outcome)`. Applying the outcome to the score is the
/// caller's job.
pub fn resolve_round<S: ChoiceSource + ?Sized>(player: Choice, source: &mut S) -> (Choice, Outcome) {
    assert!(player.is_concrete(), "Player choice must be Rock, Paper or Scissors");
    let computer = source.draw();
    (computer, determine_outcome(player, computer))
}

/// Game engine owning its random source.
#[derive(Clone, Debug)]
pub struct GameEngine<S> {
    source: S,
}

impl<S: ChoiceSource> GameEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// See [`resolve_round`].
    pub fn resolve_round(&mut self, player: Choice) -> (Choice, Outcome) {
        resolve_round(player, &mut self.source)
    }

    /// Borrow the underlying source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;
    use crate::engine::ScriptedSource;

    #[test]
    fn test_fixed_pairs() {
        assert_eq!(determine_outcome(Choice::Rock, Choice::Scissors), Outcome::PlayerWins);
        assert_eq!(determine_outcome(Choice::Scissors, Choice::Rock), Outcome::ComputerWins);
        assert_eq!(determine_outcome(Choice::Paper, Choice::Paper), Outcome::Tie);
    }

    #[test]
    fn test_full_table() {
        use Choice::*;
        use Outcome::*;

        let table = [
            (Rock, Rock, Tie),
            (Rock, Paper, ComputerWins),
            (Rock, Scissors, PlayerWins),
            (Paper, Rock, PlayerWins),
            (Paper, Paper, Tie),
            (Paper, Scissors, ComputerWins),
            (Scissors, Rock, ComputerWins),
            (Scissors, Paper, PlayerWins),
            (Scissors, Scissors, Tie),
        ];

        for (player, computer, expected) in table {
            assert_eq!(determine_outcome(player, computer), expected, "{player} vs {computer}");
        }
    }

    #[test]
    fn test_resolve_uses_source() {
        let mut source = ScriptedSource::new(vec![Choice::Scissors, Choice::Paper]);

        assert_eq!(
            resolve_round(Choice::Rock, &mut source),
            (Choice::Scissors, Outcome::PlayerWins)
        );
        assert_eq!(
            resolve_round(Choice::Rock, &mut source),
            (Choice::Paper, Outcome::ComputerWins)
        );
    }

    #[test]
    fn test_engine_is_deterministic_with_seed() {
        let mut engine1 = GameEngine::new(GameRng::new(5));
        let mut engine2 = GameEngine::new(GameRng::new(5));

        for _ in 0..50 {
            assert_eq!(
                engine1.resolve_round(Choice::Paper),
                engine2.resolve_round(Choice::Paper)
            );
        }
        assert_eq!(engine1.source().seed(), 5);
    }

    #[test]
    #[should_panic(expected = "Player choice must be")]
    fn test_resolve_rejects_none() {
        let mut rng = GameRng::new(1);
        let _ = resolve_round(Choice::None, &mut rng);
    }

    #[test]
    #[should_panic(expected = "Computer choice must be")]
    fn test_outcome_rejects_none_computer() {
        let _ = determine_outcome(Choice::Rock, Choice::None);
    }
}
