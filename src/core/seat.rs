//! Seat identification for the two sides of a game.
//!
//! A game of Pig always has exactly two seats. The simulator tracks which
//! seat is acting and reports the winner as a `Seat`.

use serde::{Deserialize, Serialize};

/// One of the two sides of a game.
///
/// Seat indices are 0-based: the first strategy passed to the simulator sits
/// in `Seat::FIRST`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat(u8);

impl Seat {
    /// The seat of the first strategy.
    pub const FIRST: Seat = Seat(0);

    /// The seat of the second strategy.
    pub const SECOND: Seat = Seat(1);

    /// Both seats in order.
    pub const BOTH: [Seat; 2] = [Seat::FIRST, Seat::SECOND];

    /// Get the raw seat index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Seat {
        Seat(1 - self.0)
    }

    /// Pick a seat with a fair coin.
    pub fn random(rng: &mut super::GameRng) -> Seat {
        if rng.coin_flip() {
            Seat::SECOND
        } else {
            Seat::FIRST
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    #[test]
    fn test_seat_index() {
        assert_eq!(Seat::FIRST.index(), 0);
        assert_eq!(Seat::SECOND.index(), 1);
        assert_eq!(format!("{}", Seat::SECOND), "Seat 1");
    }

    #[test]
    fn test_other_is_involution() {
        for seat in Seat::BOTH {
            assert_ne!(seat.other(), seat);
            assert_eq!(seat.other().other(), seat);
        }
    }

    #[test]
    fn test_random_seat_hits_both() {
        let mut rng = GameRng::new(3);
        let firsts = (0..1000)
            .filter(|_| Seat::random(&mut rng) == Seat::FIRST)
            .count();

        assert!((400..=600).contains(&firsts), "firsts = {}", firsts);
    }
}
