//! # pig-tournament
//!
//! Statistical comparison of strategies for the dice game Pig.
//!
//! ## Rules
//!
//! Two sides take turns. On a turn the acting side repeatedly chooses to
//! **roll** a die (a 1 loses everything gained this turn and ends it, any
//! other face adds to the turn total) or **stay** (bank the turn total and
//! pass the die). The first side whose banked plus turn points reach the
//! winning score (100 by default) wins.
//!
//! ## Architecture
//!
//! - **Value-typed state**: `Score` is `Copy`; every action returns a new one.
//!
//! - **Pluggable policies**: strategies implement the `Strategy` trait and
//!   are shared read-only across games and threads.
//!
//! - **Private tallies**: the round robin gives each worker thread its own
//!   RNG stream and win vector; results are merged only after every worker
//!   has reported, so no locks are needed.
//!
//! ## Modules
//!
//! - `core`: Seats, scores, actions, RNG, configuration
//! - `strategy`: Strategy trait and the reference policies
//! - `game`: Single-game simulator
//! - `tournament`: Round-robin scheduler and results
//! - `report`: Win/loss ratio rendering
//! - `error`: Error type

pub mod core;
pub mod error;
pub mod strategy;
pub mod game;
pub mod tournament;
pub mod report;

// Re-export commonly used types
pub use crate::core::{
    Seat, GameRng, Score,
    Action, Transition, roll, stay,
    GameConfig, TournamentConfig,
};

pub use crate::error::{Result, TournamentError};

pub use crate::strategy::{
    Strategy, BoxedStrategy, StayAtK, RandomStrategy, standard_roster,
};

pub use crate::game::{play, play_recorded, GameRecord};

pub use crate::tournament::{
    round_robin, TournamentResult, SeriesRecord, TournamentStats,
};

pub use crate::report::{ratio_string, standings};
