//! Round-robin scheduling across worker threads.
//!
//! Worker `i` plays every series `(i, j)` with `j > i`, so each unordered pair
//! is owned by exactly one worker and no two workers ever touch the same
//! tally. Workers keep private win vectors sized to the full roster and hand
//! them back over a channel; the orchestrator waits for all `n` reports and
//! only then sums them.

use std::thread;
use std::time::Instant;

use crossbeam_channel as chan;

use crate::core::{GameConfig, GameRng, Seat, TournamentConfig};
use crate::error::{Result, TournamentError};
use crate::game::play_recorded;
use crate::strategy::Strategy;

use super::result::{SeriesRecord, TournamentResult};
use super::stats::TournamentStats;

/// Everything one worker sends back.
#[derive(Debug)]
struct WorkerReport {
    worker: usize,
    wins: Vec<u64>,
    series: Vec<SeriesRecord>,
    games: u64,
    actions: u64,
}

/// Play a series between every pair of strategies and merge the wins.
///
/// Each strategy plays every other strategy `config.games_per_series` times.
/// The opening seat of each game is a coin flip, so home and away balance
/// out. With `config.seed` set, the result is reproducible no matter how the
/// worker threads are scheduled.
///
/// ```
/// use pig_tournament::core::TournamentConfig;
/// use pig_tournament::strategy::{BoxedStrategy, RandomStrategy, StayAtK};
/// use pig_tournament::tournament::round_robin;
///
/// let roster: Vec<BoxedStrategy> = vec![
///     Box::new(StayAtK::new(20)),
///     Box::new(StayAtK::new(50)),
///     Box::new(RandomStrategy),
/// ];
/// let config = TournamentConfig::new().with_games_per_series(100);
///
/// let result = round_robin(&roster, &config).unwrap();
/// assert_eq!(result.games_per_strategy, 200);
/// assert_eq!(result.total_wins(), 300);
/// ```
pub fn round_robin<S: Strategy>(
    strategies: &[S],
    config: &TournamentConfig,
) -> Result<TournamentResult> {
    config.validate()?;
    let n = strategies.len();
    if n < 2 {
        return Err(TournamentError::TooFewStrategies { count: n });
    }

    let games_per_series = u64::from(config.games_per_series);
    let game = config.game;
    let root = config
        .seed
        .map(GameRng::new)
        .unwrap_or_else(GameRng::from_entropy);

    let start = Instant::now();
    let reports = collect_reports(strategies, &game, games_per_series, &root)?;

    let mut wins = vec![0u64; n];
    let mut series = Vec::with_capacity(n * (n - 1) / 2);
    let mut stats = TournamentStats {
        workers: n,
        ..TournamentStats::new()
    };

    // Addition commutes, so arrival order does not matter.
    for report in reports {
        debug_assert_eq!(report.wins.len(), n, "worker {} sent a short tally", report.worker);
        for (total, w) in wins.iter_mut().zip(&report.wins) {
            *total += w;
        }
        series.extend(report.series);
        stats.games_played += report.games;
        stats.actions_taken += report.actions;
    }
    series.sort_unstable_by_key(|s| (s.lower, s.higher));
    stats.elapsed_us = start.elapsed().as_micros() as u64;

    Ok(TournamentResult {
        wins,
        games_per_strategy: games_per_series * (n as u64 - 1),
        games_per_series,
        series,
        stats,
    })
}

/// Spawn one worker per strategy and block until every one has reported.
fn collect_reports<S: Strategy>(
    strategies: &[S],
    game: &GameConfig,
    games_per_series: u64,
    root: &GameRng,
) -> Result<Vec<WorkerReport>> {
    let n = strategies.len();
    let (tx, rx) = chan::unbounded::<WorkerReport>();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..n)
            .map(|worker| {
                let tx = tx.clone();
                let mut rng = root.for_stream(worker as u64);
                scope.spawn(move || {
                    let report = run_worker(worker, strategies, game, games_per_series, &mut rng);
                    // The receiver outlives every worker inside this scope.
                    let _ = tx.send(report);
                })
            })
            .collect();
        drop(tx);

        let mut reports = Vec::with_capacity(n);
        while reports.len() < n {
            match rx.recv() {
                Ok(report) => reports.push(report),
                // Every sender is gone: some worker died without reporting.
                Err(chan::RecvError) => break,
            }
        }

        let mut failed = None;
        for (worker, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() && failed.is_none() {
                failed = Some(worker);
            }
        }
        if let Some(worker) = failed {
            return Err(TournamentError::WorkerFailed { worker });
        }
        if reports.len() != n {
            return Err(TournamentError::MissingReports {
                expected: n,
                received: reports.len(),
            });
        }
        Ok(reports)
    })
}

/// Play every series where `worker` is the lower index.
///
/// Each game runs on its own fork of the worker stream.
fn run_worker<S: Strategy>(
    worker: usize,
    strategies: &[S],
    game: &GameConfig,
    games_per_series: u64,
    rng: &mut GameRng,
) -> WorkerReport {
    let n = strategies.len();
    let mut wins = vec![0u64; n];
    let mut series = Vec::with_capacity(n - worker - 1);
    let mut games = 0u64;
    let mut actions = 0u64;

    for opponent in worker + 1..n {
        let mut record = SeriesRecord {
            lower: worker,
            higher: opponent,
            lower_wins: 0,
            higher_wins: 0,
        };

        for _ in 0..games_per_series {
            let mut game_rng = rng.fork();
            let game_record =
                play_recorded(&strategies[worker], &strategies[opponent], game, &mut game_rng);
            if game_record.winner == Seat::FIRST {
                record.lower_wins += 1;
            } else {
                record.higher_wins += 1;
            }
            games += 1;
            actions += u64::from(game_record.actions);
        }

        wins[worker] += record.lower_wins;
        wins[opponent] += record.higher_wins;
        series.push(record);
    }

    WorkerReport {
        worker,
        wins,
        series,
        games,
        actions,
    }
}
