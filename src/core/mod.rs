//! Core game types: seats, scores, actions, RNG, configuration.
//!
//! Everything here is strategy-agnostic. Strategies read a `Score` and pick
//! an `Action`; the simulator applies it.

pub mod seat;
pub mod rng;
pub mod config;
pub mod score;
pub mod action;

pub use seat::Seat;
pub use rng::GameRng;
pub use config::{GameConfig, TournamentConfig, DEFAULT_GAMES_PER_SERIES, DEFAULT_WIN_SCORE};
pub use score::Score;
pub use action::{roll, stay, Action, Transition};
