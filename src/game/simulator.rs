//! The game loop.
//!
//! The loop checks the acting side's banked-plus-turn total before every
//! decision and stops as soon as it reaches the winning score. Whoever is
//! acting at that moment wins. There is no move limit: a game between any
//! two strategies that sometimes roll ends with probability 1.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameRng, Score, Seat};
use crate::strategy::Strategy;

/// Summary of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// The winning seat.
    pub winner: Seat,

    /// The seat that acted first.
    pub first_to_act: Seat,

    /// Number of actions applied.
    pub actions: u32,

    /// Number of completed turns (stays plus rolled ones).
    pub turns: u32,

    /// Final score, from the winner's perspective.
    pub final_score: Score,
}

/// Play one game and return the winning seat.
///
/// `first` sits in `Seat::FIRST`, `second` in `Seat::SECOND`. The opening
/// seat is chosen with a coin flip from `rng`.
pub fn play<A, B>(first: &A, second: &B, config: &GameConfig, rng: &mut GameRng) -> Seat
where
    A: Strategy + ?Sized,
    B: Strategy + ?Sized,
{
    play_recorded(first, second, config, rng).winner
}

/// Play one game and return its summary.
pub fn play_recorded<A, B>(
    first: &A,
    second: &B,
    config: &GameConfig,
    rng: &mut GameRng,
) -> GameRecord
where
    A: Strategy + ?Sized,
    B: Strategy + ?Sized,
{
    let first_to_act = Seat::random(rng);
    let mut current = first_to_act;
    let mut score = Score::new();
    let mut actions = 0u32;
    let mut turns = 0u32;

    while !score.has_reached(config.win_score) {
        let action = if current == Seat::FIRST {
            first.next_action(&score, rng)
        } else {
            second.next_action(&score, rng)
        };

        let transition = action.apply(score, rng);
        score = transition.score;
        actions += 1;

        if transition.turn_over {
            current = current.other();
            turns += 1;
        }
    }

    GameRecord {
        winner: current,
        first_to_act,
        actions,
        turns,
        final_score: score,
    }
}
