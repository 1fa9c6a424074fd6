//! Game engine tests: outcome table properties and draw distribution.

use proptest::prelude::*;
use rust_rps::core::{Choice, GameRng, Outcome};
use rust_rps::engine::{determine_outcome, resolve_round, ChoiceSource, GameEngine, ScriptedSource};

fn hand() -> impl Strategy<Value = Choice> {
    prop::sample::select(Choice::HANDS.to_vec())
}

// =============================================================================
// Outcome Properties
// =============================================================================

proptest! {
    /// Swapping seats swaps the winner.
    #[test]
    fn test_outcome_is_antisymmetric(player in hand(), computer in hand()) {
        prop_assert_eq!(
            determine_outcome(player, computer),
            determine_outcome(computer, player).reversed()
        );
    }

    /// Ties happen exactly on equal hands.
    #[test]
    fn test_tie_iff_equal(player in hand(), computer in hand()) {
        let tie = determine_outcome(player, computer) == Outcome::Tie;
        prop_assert_eq!(tie, player == computer);
    }

    /// The player wins exactly when their hand beats the computer's.
    #[test]
    fn test_player_wins_iff_beats(player in hand(), computer in hand()) {
        let wins = determine_outcome(player, computer) == Outcome::PlayerWins;
        prop_assert_eq!(wins, player.beats() == Some(computer));
    }

    /// Resolution is a pure function of the pair: no hidden state.
    #[test]
    fn test_resolution_depends_only_on_pair(
        player in hand(),
        script in prop::collection::vec(hand(), 1..20),
    ) {
        let mut source = ScriptedSource::new(script.clone());
        for &computer in &script {
            let resolved = resolve_round(player, &mut source);
            prop_assert_eq!(resolved, (computer, determine_outcome(player, computer)));
        }
    }
}

#[test]
fn test_reference_rounds() {
    assert_eq!(determine_outcome(Choice::Rock, Choice::Scissors), Outcome::PlayerWins);
    assert_eq!(determine_outcome(Choice::Scissors, Choice::Rock), Outcome::ComputerWins);
    assert_eq!(determine_outcome(Choice::Paper, Choice::Paper), Outcome::Tie);
}

// =============================================================================
// Draw Distribution
// =============================================================================

/// Each hand shows up about a third of the time for a fixed player hand.
#[test]
fn test_draws_are_uniform() {
    const TRIALS: usize = 30_000;

    for seed in [1, 42, 9001] {
        let mut engine = GameEngine::new(GameRng::new(seed));
        let mut counts = [0usize; 3];

        for _ in 0..TRIALS {
            let (computer, _) = engine.resolve_round(Choice::Rock);
            counts[computer.index().unwrap()] += 1;
        }

        for count in counts {
            let frequency = count as f64 / TRIALS as f64;
            assert!(
                (frequency - 1.0 / 3.0).abs() < 0.02,
                "seed {seed}: frequency {frequency} too far from 1/3"
            );
        }
    }
}

/// The draw ignores what the player picked.
#[test]
fn test_draws_ignore_player_hand() {
    let mut a = GameRng::new(77);
    let mut b = GameRng::new(77);

    for hand in Choice::HANDS.iter().cycle().take(60) {
        let (from_a, _) = resolve_round(*hand, &mut a);
        let from_b = b.draw();
        assert_eq!(from_a, from_b);
    }
}
