//! Aggregated tournament results.

use serde::{Deserialize, Serialize};

use super::stats::TournamentStats;

/// Outcome of one series between two strategies.
///
/// `lower` is always the smaller roster index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesRecord {
    pub lower: usize,
    pub higher: usize,
    pub lower_wins: u64,
    pub higher_wins: u64,
}

impl SeriesRecord {
    /// Games played in this series.
    #[must_use]
    pub const fn games(&self) -> u64 {
        self.lower_wins + self.higher_wins
    }
}

/// Merged result of a round robin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TournamentResult {
    /// Wins per strategy, indexed like the roster.
    pub wins: Vec<u64>,

    /// Games each strategy played: `games_per_series * (n - 1)`.
    pub games_per_strategy: u64,

    /// Games in every series.
    pub games_per_series: u64,

    /// One record per unordered pair, sorted by `(lower, higher)`.
    pub series: Vec<SeriesRecord>,

    /// Work counters.
    pub stats: TournamentStats,
}

impl TournamentResult {
    /// Number of strategies in the tournament.
    #[must_use]
    pub fn strategy_count(&self) -> usize {
        self.wins.len()
    }

    /// Losses of the strategy at `index`.
    #[must_use]
    pub fn losses(&self, index: usize) -> u64 {
        self.games_per_strategy - self.wins[index]
    }

    /// Sum of all wins, equal to the number of games played.
    #[must_use]
    pub fn total_wins(&self) -> u64 {
        self.wins.iter().sum()
    }

    /// The series between `a` and `b`, in either order.
    #[must_use]
    pub fn series_between(&self, a: usize, b: usize) -> Option<&SeriesRecord> {
        let key = (a.min(b), a.max(b));
        self.series
            .binary_search_by_key(&key, |s| (s.lower, s.higher))
            .ok()
            .map(|i| &self.series[i])
    }

    /// Roster indices ordered by wins, best first. Ties keep roster order.
    #[must_use]
    pub fn ranking(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.wins.len()).collect();
        order.sort_by(|&a, &b| self.wins[b].cmp(&self.wins[a]));
        order
    }
}
