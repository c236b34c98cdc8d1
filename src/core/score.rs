//! The score model: banked totals for both sides plus the running turn.
//!
//! Scores are always seen from the acting side's perspective: `player` is the
//! banked total of whoever is about to act, `opponent` the other side's.
//! Every action produces a fresh `Score`; nothing is mutated in place.

use serde::{Deserialize, Serialize};

/// Banked scores and the current turn accumulator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    /// Banked score of the acting side.
    pub player: u32,
    /// Banked score of the waiting side.
    pub opponent: u32,
    /// Points accumulated by the acting side this turn, not yet banked.
    pub this_turn: u32,
}

impl Score {
    /// The opening score (0, 0, 0).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            player: 0,
            opponent: 0,
            this_turn: 0,
        }
    }

    /// Create a score from explicit parts.
    #[must_use]
    pub const fn from_parts(player: u32, opponent: u32, this_turn: u32) -> Self {
        Self {
            player,
            opponent,
            this_turn,
        }
    }

    /// Banked plus unbanked points of the acting side, saturating at `u32::MAX`.
    #[must_use]
    pub const fn turn_total(&self) -> u32 {
        self.player.saturating_add(self.this_turn)
    }

    /// Whether the acting side has reached `win_score`.
    #[must_use]
    pub const fn has_reached(&self, win_score: u32) -> bool {
        self.turn_total() >= win_score
    }

    /// Hand the die to the other side.
    ///
    /// `banked` is the acting side's total after the turn ends.
    #[must_use]
    pub(crate) const fn pass_turn(&self, banked: u32) -> Self {
        Self {
            player: self.opponent,
            opponent: banked,
            this_turn: 0,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (+{}) vs {}",
            self.player, self.this_turn, self.opponent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero() {
        assert_eq!(Score::new(), Score::default());
        assert_eq!(Score::new().turn_total(), 0);
    }

    #[test]
    fn test_has_reached() {
        let score = Score::from_parts(90, 40, 9);
        assert!(!score.has_reached(100));

        let score = Score::from_parts(90, 40, 10);
        assert!(score.has_reached(100));
    }

    #[test]
    fn test_turn_total_saturates() {
        let score = Score::from_parts(u32::MAX - 2, 0, 5);

        assert_eq!(score.turn_total(), u32::MAX);
        assert!(score.has_reached(u32::MAX));
    }

    #[test]
    fn test_pass_turn_swaps_sides() {
        let score = Score::from_parts(30, 55, 12);
        let next = score.pass_turn(42);

        assert_eq!(next, Score::from_parts(55, 42, 0));
    }

    #[test]
    fn test_display() {
        let score = Score::from_parts(10, 20, 5);
        assert_eq!(format!("{}", score), "10 (+5) vs 20");
    }

    #[test]
    fn test_serde_roundtrip() {
        let score = Score::from_parts(1, 2, 3);
        let json = serde_json::to_string(&score).unwrap();
        let back: Score = serde_json::from_str(&json).unwrap();

        assert_eq!(score, back);
        assert!(json.contains("\"this_turn\":3"));
    }
}
