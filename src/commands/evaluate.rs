//! Exhaustive evaluation with progress reporting
//!
//! Runs the strategy against every possible secret and collects statistics.

use crate::core::Configuration;
use crate::evaluation::{EvaluationReport, Evaluator};
use crate::output::log::Logger;
use crate::solver::StrategyKind;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Evaluation settings beyond the configuration and strategy
pub struct EvaluateConfig {
    /// Rounds precomputed once and shared by every game
    pub levels: usize,
    pub max_rounds: usize,
    /// Draw a progress bar while games run
    pub progress: bool,
}

/// Report plus timing information
pub struct EvaluateResult {
    pub strategy: StrategyKind,
    pub report: EvaluationReport,
    pub precompute_time: Duration,
    pub total_time: Duration,
}

/// Evaluate a strategy over every code of the configuration
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid or a game fails,
/// which only happens if the strategy runs out of candidates.
pub fn run_evaluate(
    config: &Configuration,
    kind: StrategyKind,
    settings: &EvaluateConfig,
    logger: Logger,
) -> anyhow::Result<EvaluateResult> {
    let total_start = Instant::now();

    logger.info(format_args!(
        "precomputing {} rounds of the {kind} strategy",
        settings.levels
    ));
    let evaluator = Evaluator::new(config, || kind.build(config), settings.levels)
        .with_max_rounds(settings.max_rounds);
    let precompute_time = total_start.elapsed();
    logger.info(format_args!(
        "precomputed {} guesses in {:.2}s",
        evaluator.cache().len(),
        precompute_time.as_secs_f64()
    ));

    let games = config.all_codes().len();
    logger.info(format_args!("playing {games} games"));

    let pb = if settings.progress {
        let pb = ProgressBar::new(games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut played = 0usize;
    let mut rounds = 0usize;
    let report = evaluator.evaluate_with(|secret, outcome| {
        logger.debug(format_args!(
            "{secret}: {} in {} rounds",
            if outcome.won { "won" } else { "lost" },
            outcome.rounds
        ));

        played += 1;
        rounds += outcome.rounds;
        if played % 10 == 0 {
            let avg = rounds as f64 / played as f64;
            pb.set_message(format!("Avg: {avg:.3}"));
        }
        pb.inc(1);
    })?;

    pb.finish_with_message("Complete!");

    Ok(EvaluateResult {
        strategy: kind,
        report,
        precompute_time,
        total_time: total_start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::log::Level;

    #[test]
    fn evaluate_small_configuration() {
        let config = Configuration::new("ABCD", 2, false).unwrap();
        let settings = EvaluateConfig {
            levels: 2,
            max_rounds: 10,
            progress: false,
        };

        let result = run_evaluate(
            &config,
            StrategyKind::ExpectedSize,
            &settings,
            Logger::new(Level::Quiet),
        )
        .unwrap();

        assert_eq!(result.strategy, StrategyKind::ExpectedSize);
        assert_eq!(result.report.games_played, 16);
        assert_eq!(result.report.total_rounds, 45);
        assert!(result.total_time >= result.precompute_time);
    }

    #[test]
    fn evaluate_respects_max_rounds() {
        let config = Configuration::new("ABCD", 2, false).unwrap();
        let settings = EvaluateConfig {
            levels: 0,
            max_rounds: 4,
            progress: false,
        };

        let result =
            run_evaluate(&config, StrategyKind::Dumb, &settings, Logger::new(Level::Quiet)).unwrap();
        assert_eq!(result.report.games_won, 1);
        assert_eq!(result.report.max_rounds, 4);
    }
}
