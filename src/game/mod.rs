//! Single-game simulation.
//!
//! - **play**: runs one game to completion and returns the winning seat
//! - **play_recorded**: same loop, also returning a `GameRecord` summary
//!
//! ## Usage
//!
//! ```
//! use pig_tournament::core::{GameConfig, GameRng, Seat};
//! use pig_tournament::game::play;
//! use pig_tournament::strategy::{RandomStrategy, StayAtK};
//!
//! let mut rng = GameRng::new(2024);
//! let winner = play(&StayAtK::new(20), &RandomStrategy, &GameConfig::default(), &mut rng);
//! assert!(Seat::BOTH.contains(&winner));
//! ```

mod simulator;

pub use simulator::{play, play_recorded, GameRecord};
