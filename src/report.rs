//! Text rendering of win/loss ratios.
//!
//! ```
//! use pig_tournament::report::ratio_string;
//!
//! assert_eq!(
//!     ratio_string(&[1, 2, 3]).unwrap(),
//!     "1/6 (16.7%), 2/6 (33.3%), 3/6 (50.0%)"
//! );
//! ```

use crate::error::{Result, TournamentError};
use crate::strategy::Strategy;
use crate::tournament::TournamentResult;

/// List each value with its share of the total, `"v/total (p.p%)"`, joined
/// by `", "`.
///
/// A zero total has no meaningful shares and is rejected.
pub fn ratio_string(values: &[u64]) -> Result<String> {
    let total: u64 = values.iter().sum();
    if total == 0 {
        return Err(TournamentError::EmptyRatio);
    }

    let parts: Vec<String> = values
        .iter()
        .map(|&value| {
            let pct = 100.0 * value as f64 / total as f64;
            format!("{}/{} ({:.1}%)", value, total, pct)
        })
        .collect();
    Ok(parts.join(", "))
}

/// One `"Wins, losses <label>: <ratio>"` line per strategy, in roster order.
pub fn standings<S: Strategy>(
    result: &TournamentResult,
    strategies: &[S],
) -> Result<Vec<String>> {
    strategies
        .iter()
        .enumerate()
        .map(|(i, strategy)| {
            let ratio = ratio_string(&[result.wins[i], result.losses(i)])?;
            Ok(format!("Wins, losses {}: {}", strategy.label(), ratio))
        })
        .collect()
}
