//! Action primitives: `roll` and `stay`.
//!
//! An action is a transition rule from one `Score` to the next. `roll` draws
//! exactly one die from the given RNG; `stay` draws nothing. Neither touches
//! anything but its arguments.
//!
//! ```
//! use pig_tournament::core::{Action, GameRng, Score};
//!
//! let mut rng = GameRng::new(1);
//! let start = Score::from_parts(10, 20, 7);
//!
//! let after = Action::Stay.apply(start, &mut rng);
//! assert!(after.turn_over);
//! assert_eq!(after.score, Score::from_parts(20, 17, 0));
//! ```

use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use super::score::Score;

/// The two moves available to the acting side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Throw the die: a 1 forfeits the turn, anything else adds to it.
    Roll,
    /// Bank the turn total and pass the die.
    Stay,
}

impl Action {
    /// Apply this action to `score`.
    pub fn apply(self, score: Score, rng: &mut GameRng) -> Transition {
        match self {
            Action::Roll => roll(score, rng),
            Action::Stay => stay(score),
        }
    }

    /// Short name for traces.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Action::Roll => "roll",
            Action::Stay => "stay",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of applying an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The score after the action, from the perspective of whoever acts next.
    pub score: Score,
    /// Whether the acting side changed.
    pub turn_over: bool,
}

/// Roll the die once.
///
/// On a 1 the turn total is lost and the sides swap. Otherwise the face value
/// is added to `this_turn` and the same side keeps the die.
pub fn roll(score: Score, rng: &mut GameRng) -> Transition {
    let outcome = rng.roll_die();
    if outcome == 1 {
        return Transition {
            score: score.pass_turn(score.player),
            turn_over: true,
        };
    }
    Transition {
        score: Score {
            this_turn: score.this_turn.saturating_add(outcome),
            ..score
        },
        turn_over: false,
    }
}

/// Bank `this_turn` into the acting side's score and swap sides.
pub fn stay(score: Score) -> Transition {
    Transition {
        score: score.pass_turn(score.turn_total()),
        turn_over: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stay_banks_and_swaps() {
        let start = Score::from_parts(40, 65, 18);
        let t = stay(start);

        assert!(t.turn_over);
        assert_eq!(t.score.this_turn, 0);
        assert_eq!(t.score.player, 65);
        assert_eq!(t.score.opponent, 58);
    }

    #[test]
    fn test_stay_with_empty_turn() {
        let t = stay(Score::new());
        assert!(t.turn_over);
        assert_eq!(t.score, Score::new());
    }

    #[test]
    fn test_roll_outcomes() {
        let mut rng = GameRng::new(5);
        let start = Score::from_parts(12, 30, 4);
        let mut resets = 0;
        let trials = 6_000;

        for _ in 0..trials {
            let t = roll(start, &mut rng);
            if t.turn_over {
                resets += 1;
                assert_eq!(t.score, Score::from_parts(30, 12, 0));
            } else {
                let gained = t.score.this_turn - start.this_turn;
                assert!((2..=6).contains(&gained), "gained {}", gained);
                assert_eq!(t.score.player, start.player);
                assert_eq!(t.score.opponent, start.opponent);
            }
        }

        // Expect ~1000 resets
        assert!((850..=1150).contains(&resets), "resets = {}", resets);
    }

    #[test]
    fn test_stay_draws_nothing_and_roll_draws_once() {
        let score = Score::from_parts(20, 35, 9);
        let mut a = GameRng::new(61);
        let mut b = a.clone();

        let _ = Action::Stay.apply(score, &mut a);
        assert_eq!(a.roll_die(), b.roll_die());

        let _ = Action::Roll.apply(score, &mut a);
        let _ = b.roll_die();
        for _ in 0..10 {
            assert_eq!(a.roll_die(), b.roll_die());
        }
    }

    #[test]
    fn test_roll_near_limit_saturates() {
        let mut rng = GameRng::new(2);
        let start = Score::from_parts(0, 0, u32::MAX - 1);

        for _ in 0..20 {
            let t = roll(start, &mut rng);
            if !t.turn_over {
                assert_eq!(t.score.this_turn, u32::MAX);
            }
        }
    }

    #[test]
    fn test_apply_dispatches() {
        let mut rng = GameRng::new(8);
        let start = Score::from_parts(0, 0, 9);

        assert_eq!(Action::Stay.apply(start, &mut rng), stay(start));

        let mut a = GameRng::new(8);
        let mut b = GameRng::new(8);
        assert_eq!(Action::Roll.apply(start, &mut a), roll(start, &mut b));
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Roll.to_string(), "roll");
        assert_eq!(Action::Stay.to_string(), "stay");
    }
}
