//! Mastermind Solver - CLI
//!
//! Plays Mastermind against a human, solves known secrets, and evaluates
//! strategies over every possible code.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{EvaluateConfig, SolveConfig, run_evaluate, run_play, solve_code},
    core::Configuration,
    evaluation,
    game::DEFAULT_MAX_ROUNDS,
    output::{
        Level, Logger, print_configuration, print_evaluation_result, print_play_outcome,
        print_solve_result,
    },
    solver::{GuessCache, StrategyKind},
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind / Bulls and Cows solver with minimax, expected-size and percentile strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Symbols codes are made of, drawn from 0-9 and A-H
    #[arg(short, long, global = true, default_value = "ABCDEF")]
    alphabet: String,

    /// Code length (1-9)
    #[arg(short, long, global = true, default_value_t = 4)]
    length: usize,

    /// Forbid repeated symbols within a code
    #[arg(short, long, global = true)]
    unique: bool,

    /// Strategy: simple (default), knuth, expected-size, percentile, dumb
    #[arg(short, long, global = true, default_value = "simple")]
    strategy: String,

    /// Percentile used by the percentile strategy (0-100)
    #[arg(short, long, global = true, default_value_t = 0.0)]
    percentile: f64,

    /// Rounds to precompute before playing
    #[arg(short = 'c', long, global = true, default_value_t = 1)]
    precompute: usize,

    /// More diagnostics on stderr (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Computer guesses a code you keep secret (default)
    Play {
        /// Give up after this many rounds
        #[arg(short, long, default_value_t = DEFAULT_MAX_ROUNDS)]
        max_rounds: usize,
    },

    /// Solve a known secret code
    Solve {
        /// The secret; a random code is used when omitted
        secret: Option<String>,

        /// Give up after this many rounds
        #[arg(short, long, default_value_t = DEFAULT_MAX_ROUNDS)]
        max_rounds: usize,
    },

    /// Play against every possible secret and report statistics
    Evaluate {
        /// Give up a game after this many rounds
        #[arg(short, long, default_value_t = evaluation::MAX_ROUNDS)]
        max_rounds: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let logger = Logger::new(Level::from_flags(cli.verbose, cli.quiet));

    let config = Configuration::new(&cli.alphabet, cli.length, cli.unique)
        .context("invalid game configuration")?;
    let kind = StrategyKind::from_name(&cli.strategy, cli.percentile)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        max_rounds: DEFAULT_MAX_ROUNDS,
    });

    if logger.enabled(Level::Info) {
        print_configuration(&config);
    }

    match command {
        Commands::Play { max_rounds } => {
            let cache = precompute(&config, kind, cli.precompute, logger);
            let outcome = run_play(&config, kind, &cache, max_rounds, logger)
                .context("game aborted")?;
            print_play_outcome(&outcome);
        }
        Commands::Solve { secret, max_rounds } => {
            let cache = precompute(&config, kind, cli.precompute, logger);
            let mut solve = SolveConfig::new(secret);
            solve.max_rounds = max_rounds;
            let result = solve_code(&config, kind, &cache, solve, logger)?;
            print_solve_result(&result, logger.enabled(Level::Debug));
        }
        Commands::Evaluate { max_rounds } => {
            let settings = EvaluateConfig {
                levels: cli.precompute,
                max_rounds,
                progress: logger.enabled(Level::Info),
            };
            let result = run_evaluate(&config, kind, &settings, logger)?;
            print_evaluation_result(&result);
        }
    }

    Ok(())
}

fn precompute(
    config: &Configuration,
    kind: StrategyKind,
    levels: usize,
    logger: Logger,
) -> GuessCache {
    logger.info(format_args!("precomputing {levels} rounds of the {kind} strategy"));
    let cache = GuessCache::build(config, || kind.build(config), levels);
    logger.debug(format_args!("{} guesses precomputed", cache.len()));
    cache
}
