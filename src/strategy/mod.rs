//! Decision policies for the acting side.
//!
//! A strategy maps the current `Score` to the next `Action`. Strategies are
//! stateless: the same instance is shared by every game a worker plays, and
//! across worker threads, so any parameters are fixed at construction.
//!
//! New strategies are added by implementing [`Strategy`]; the simulator and
//! scheduler never need to change.
//!
//! ```
//! use pig_tournament::core::{Action, GameRng, Score};
//! use pig_tournament::strategy::{StayAtK, Strategy};
//!
//! let cautious = StayAtK::new(20);
//! let mut rng = GameRng::new(0);
//!
//! assert_eq!(cautious.next_action(&Score::from_parts(0, 0, 19), &mut rng), Action::Roll);
//! assert_eq!(cautious.next_action(&Score::from_parts(0, 0, 20), &mut rng), Action::Stay);
//! assert_eq!(cautious.label(), "Stay at 20");
//! ```

mod policies;

pub use policies::{RandomStrategy, StayAtK};

use crate::core::{Action, GameRng, Score};

/// Policy for choosing an action from the acting side's perspective.
pub trait Strategy: Send + Sync {
    /// Choose the next action for the side about to act.
    ///
    /// `rng` is the game's stream; policies that randomize draw from it
    /// rather than holding their own generator.
    fn next_action(&self, score: &Score, rng: &mut GameRng) -> Action;

    /// Human-readable name for reports.
    fn label(&self) -> String;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn next_action(&self, score: &Score, rng: &mut GameRng) -> Action {
        (**self).next_action(score, rng)
    }

    fn label(&self) -> String {
        (**self).label()
    }
}

/// Boxed strategy as held by a tournament roster.
pub type BoxedStrategy = Box<dyn Strategy>;

/// The classic line-up: `Stay at 1` through `Stay at win_score`, then `Random!`.
///
/// ```
/// use pig_tournament::strategy::{standard_roster, Strategy};
///
/// let roster = standard_roster(100);
/// assert_eq!(roster.len(), 101);
/// assert_eq!(roster[0].label(), "Stay at 1");
/// assert_eq!(roster[99].label(), "Stay at 100");
/// assert_eq!(roster[100].label(), "Random!");
/// ```
pub fn standard_roster(win_score: u32) -> Vec<BoxedStrategy> {
    let mut roster: Vec<BoxedStrategy> = (1..=win_score)
        .map(|k| Box::new(StayAtK::new(k)) as BoxedStrategy)
        .collect();
    roster.push(Box::new(RandomStrategy));
    roster
}

/// Labels of every strategy in roster order.
pub fn labels(strategies: &[BoxedStrategy]) -> Vec<String> {
    strategies.iter().map(|s| s.label()).collect()
}
