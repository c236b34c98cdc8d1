//! Tournament statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Work performed by a round robin.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentStats {
    /// Games simulated across all workers.
    pub games_played: u64,

    /// Actions (rolls and stays) applied across all games.
    pub actions_taken: u64,

    /// Worker threads spawned.
    pub workers: usize,

    /// Wall-clock time from first spawn to final merge (microseconds).
    pub elapsed_us: u64,
}

impl TournamentStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate games per second.
    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        if self.elapsed_us == 0 {
            0.0
        } else {
            self.games_played as f64 / (self.elapsed_us as f64 / 1_000_000.0)
        }
    }

    /// Calculate average actions per game.
    #[must_use]
    pub fn avg_actions_per_game(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.actions_taken as f64 / self.games_played as f64
        }
    }
}

impl std::fmt::Display for TournamentStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games on {} workers in {:.1}ms ({:.0} games/s, {:.1} actions/game)",
            self.games_played,
            self.workers,
            self.elapsed_us as f64 / 1000.0,
            self.games_per_second(),
            self.avg_actions_per_game()
        )
    }
}
