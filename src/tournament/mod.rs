//! Round-robin tournaments between strategies.
//!
//! ## Overview
//!
//! - **round_robin**: fans series out to one worker thread per strategy and
//!   merges their private tallies once all have reported
//! - **TournamentResult**: per-strategy wins, per-pair series records
//! - **TournamentStats**: games, actions and wall-clock time
//!
//! ## Invariants
//!
//! For `n` strategies and `g` games per series:
//! - every series record sums to `g`
//! - `total_wins() == g * n * (n - 1) / 2`
//! - `games_per_strategy == g * (n - 1)`

mod round_robin;
mod result;
mod stats;

pub use round_robin::round_robin;
pub use result::{SeriesRecord, TournamentResult};
pub use stats::TournamentStats;
