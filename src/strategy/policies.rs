//! The two reference policies.

use crate::core::{Action, GameRng, Score};

use super::Strategy;

// =============================================================================
// Threshold
// =============================================================================

/// Roll until the turn total reaches `k`, then stay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StayAtK {
    k: u32,
}

impl StayAtK {
    /// Create a threshold policy.
    ///
    /// `k` must be at least 1: a policy that stays on an empty turn never
    /// scores, and two of them would never finish a game.
    pub fn new(k: u32) -> Self {
        assert!(k > 0, "StayAtK threshold must be at least 1");
        Self { k }
    }

    /// The configured threshold.
    #[must_use]
    pub const fn k(&self) -> u32 {
        self.k
    }
}

impl Strategy for StayAtK {
    fn next_action(&self, score: &Score, _rng: &mut GameRng) -> Action {
        if score.this_turn >= self.k {
            Action::Stay
        } else {
            Action::Roll
        }
    }

    fn label(&self) -> String {
        format!("Stay at {}", self.k)
    }
}

// =============================================================================
// Random
// =============================================================================

/// Stay or roll with equal probability, independently each decision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn next_action(&self, _score: &Score, rng: &mut GameRng) -> Action {
        if rng.coin_flip() {
            Action::Stay
        } else {
            Action::Roll
        }
    }

    fn label(&self) -> String {
        "Random!".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stay_at_k_threshold() {
        let strategy = StayAtK::new(15);
        let mut rng = GameRng::new(0);

        for this_turn in 0..15 {
            let score = Score::from_parts(50, 50, this_turn);
            assert_eq!(strategy.next_action(&score, &mut rng), Action::Roll);
        }
        for this_turn in 15..40 {
            let score = Score::from_parts(50, 50, this_turn);
            assert_eq!(strategy.next_action(&score, &mut rng), Action::Stay);
        }
    }

    #[test]
    fn test_stay_at_100_never_stays_early() {
        let strategy = StayAtK::new(100);
        let mut rng = GameRng::new(0);

        for this_turn in 0..100 {
            let score = Score::from_parts(0, 99, this_turn);
            assert_eq!(strategy.next_action(&score, &mut rng), Action::Roll);
        }
    }

    #[test]
    fn test_stay_at_k_ignores_banked_scores() {
        let strategy = StayAtK::new(10);
        let mut rng = GameRng::new(0);

        assert_eq!(
            strategy.next_action(&Score::from_parts(95, 0, 5), &mut rng),
            Action::Roll
        );
    }

    #[test]
    fn test_stay_at_k_accessor_and_label() {
        let strategy = StayAtK::new(42);
        assert_eq!(strategy.k(), 42);
        assert_eq!(strategy.label(), "Stay at 42");
    }

    #[test]
    #[should_panic(expected = "threshold must be at least 1")]
    fn test_stay_at_zero_rejected() {
        StayAtK::new(0);
    }

    #[test]
    fn test_random_label() {
        assert_eq!(RandomStrategy.label(), "Random!");
    }

    #[test]
    fn test_random_is_roughly_even() {
        let mut rng = GameRng::new(21);
        let score = Score::new();
        let stays = (0..10_000)
            .filter(|_| RandomStrategy.next_action(&score, &mut rng) == Action::Stay)
            .count();

        assert!((4_700..=5_300).contains(&stays), "stays = {}", stays);
    }
}
