//! Game and tournament configuration.
//!
//! - `GameConfig`: rules of a single game (the winning score)
//! - `TournamentConfig`: series length, seeding, and the game rules
//!
//! Both are plain values built with `with_*` methods and checked once by
//! `TournamentConfig::validate` before any work is scheduled.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TournamentError};

/// The winning score in a game of Pig.
pub const DEFAULT_WIN_SCORE: u32 = 100;

/// The number of games per series.
pub const DEFAULT_GAMES_PER_SERIES: u32 = 10;

/// Rules of a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// A side wins once banked plus turn points reach this value.
    pub win_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_score: DEFAULT_WIN_SCORE,
        }
    }
}

impl GameConfig {
    /// Create a game config with the given winning score.
    #[must_use]
    pub const fn new(win_score: u32) -> Self {
        Self { win_score }
    }
}

/// Complete tournament configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Games played between every pair of strategies.
    pub games_per_series: u32,

    /// Rules shared by every game.
    pub game: GameConfig,

    /// Root seed. `None` draws one from entropy, so runs differ.
    pub seed: Option<u64>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games_per_series: DEFAULT_GAMES_PER_SERIES,
            game: GameConfig::default(),
            seed: None,
        }
    }
}

impl TournamentConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games per series.
    #[must_use]
    pub fn with_games_per_series(mut self, games: u32) -> Self {
        self.games_per_series = games;
        self
    }

    /// Set the winning score.
    #[must_use]
    pub fn with_win_score(mut self, win_score: u32) -> Self {
        self.game.win_score = win_score;
        self
    }

    /// Fix the root seed for a reproducible run.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject configurations that cannot produce a meaningful tally.
    pub fn validate(&self) -> Result<()> {
        if self.games_per_series == 0 {
            return Err(TournamentError::ZeroGamesPerSeries);
        }
        if self.game.win_score == 0 {
            return Err(TournamentError::ZeroWinScore);
        }
        Ok(())
    }
}
