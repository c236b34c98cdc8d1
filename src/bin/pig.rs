//! Run the classic Pig round robin and print each strategy's record.
//!
//! ```shell
//! cargo run --release --bin pig -- --games-per-series 100 --seed 7
//! ```

use std::process::ExitCode;

use clap::Parser;

use pig_tournament::core::{DEFAULT_GAMES_PER_SERIES, DEFAULT_WIN_SCORE};
use pig_tournament::{round_robin, standard_roster, standings, TournamentConfig};

#[derive(Parser, Debug)]
#[command(about = "Round-robin tournament of Pig strategies")]
struct Args {
    /// Games played between every pair of strategies
    #[arg(long, default_value_t = DEFAULT_GAMES_PER_SERIES)]
    games_per_series: u32,

    /// Winning score; also the largest "Stay at k" threshold entered
    #[arg(long, default_value_t = DEFAULT_WIN_SCORE)]
    win: u32,

    /// Root seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Print the full result as JSON instead of text standings
    #[arg(long)]
    json: bool,

    /// Suppress the run summary on stderr
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut config = TournamentConfig::new()
        .with_games_per_series(args.games_per_series)
        .with_win_score(args.win);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let roster = standard_roster(args.win);
    if !args.quiet {
        eprintln!(
            "pig: {} strategies, {} games per series, first to {}",
            roster.len(),
            config.games_per_series,
            config.game.win_score
        );
    }

    let result = match round_robin(&roster, &config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("pig: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("pig: failed to encode result: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        match standings(&result, &roster) {
            Ok(lines) => {
                for line in lines {
                    println!("{line}");
                }
            }
            Err(e) => {
                eprintln!("pig: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    if !args.quiet {
        eprintln!("pig: {}", result.stats);
    }
    ExitCode::SUCCESS
}
