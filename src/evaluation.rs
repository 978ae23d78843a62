//! Exhaustive strategy evaluation
//!
//! Plays one game against every possible secret and aggregates how many
//! rounds the strategy needed.

use crate::core::{Code, Configuration};
use crate::error::MastermindError;
use crate::game::{Game, GameOutcome, SecretPlayer};
use crate::solver::{GuessCache, Strategy};
use crate::stats::Distribution;

/// Rounds allowed per game during evaluation
pub const MAX_ROUNDS: usize = 10;

/// Aggregated results of an evaluation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationReport {
    pub games_played: usize,
    pub games_won: usize,
    pub total_rounds: usize,
    /// Longest game, in rounds
    pub max_rounds: usize,
    /// Rounds played per game, won or lost
    pub rounds: Distribution,
}

impl EvaluationReport {
    fn record(&mut self, outcome: &GameOutcome) {
        self.games_played += 1;
        if outcome.won {
            self.games_won += 1;
        }
        self.total_rounds += outcome.rounds;
        self.max_rounds = self.max_rounds.max(outcome.rounds);
        self.rounds.add(outcome.rounds);
    }

    #[must_use]
    pub fn average_rounds(&self) -> Option<f64> {
        self.rounds.mean()
    }

    #[must_use]
    pub fn std_dev(&self) -> Option<f64> {
        self.rounds.std_dev()
    }

    #[must_use]
    pub fn percentile(&self, percentile: f64) -> Option<usize> {
        self.rounds.percentile(percentile)
    }

    /// Share of games won, in `0.0..=1.0`
    #[must_use]
    pub fn win_rate(&self) -> Option<f64> {
        (self.games_played > 0).then(|| self.games_won as f64 / self.games_played as f64)
    }
}

/// Single-use evaluation of one strategy over one configuration
///
/// # Examples
/// ```
/// use mastermind::core::Configuration;
/// use mastermind::evaluation::Evaluator;
/// use mastermind::solver::StrategyKind;
///
/// let config = Configuration::new("ABCD", 2, false).unwrap();
/// let report = Evaluator::new(&config, || StrategyKind::Knuth.build(&config), 1)
///     .evaluate()
///     .unwrap();
///
/// assert_eq!(report.games_played, 16);
/// assert_eq!(report.games_won, 16);
/// assert_eq!(report.total_rounds, 45);
/// assert_eq!(report.max_rounds, 4);
/// ```
pub struct Evaluator<'a, F> {
    config: &'a Configuration,
    factory: F,
    cache: GuessCache,
    max_rounds: usize,
}

impl<'a, F> Evaluator<'a, F> {
    /// Prepare an evaluation, precomputing the first `levels` rounds
    #[must_use]
    pub fn new<S>(config: &'a Configuration, factory: F, levels: usize) -> Self
    where
        F: Fn() -> S + Sync,
        S: Strategy,
    {
        let cache = GuessCache::build(config, &factory, levels);
        Self {
            config,
            factory,
            cache,
            max_rounds: MAX_ROUNDS,
        }
    }

    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// The precomputed guesses shared by every game
    #[must_use]
    pub const fn cache(&self) -> &GuessCache {
        &self.cache
    }

    /// Play every game and return the report
    ///
    /// # Errors
    /// Propagates the first game error, which only happens if the strategy
    /// runs out of candidates against a correct player.
    pub fn evaluate<S>(self) -> Result<EvaluationReport, MastermindError>
    where
        F: Fn() -> S,
        S: Strategy,
    {
        self.evaluate_with(|_, _| {})
    }

    /// Like [`Evaluator::evaluate`], calling `on_game` after each game
    ///
    /// # Errors
    /// Same as [`Evaluator::evaluate`].
    pub fn evaluate_with<S>(
        self,
        mut on_game: impl FnMut(&Code, &GameOutcome),
    ) -> Result<EvaluationReport, MastermindError>
    where
        F: Fn() -> S,
        S: Strategy,
    {
        let mut report = EvaluationReport::default();

        for &secret in self.config.all_codes() {
            let player = SecretPlayer::new(self.config, secret)?;
            let outcome = Game::new(self.config, (self.factory)(), player)
                .with_cache(&self.cache)
                .with_max_rounds(self.max_rounds)
                .play()?;

            on_game(&secret, &outcome);
            report.record(&outcome);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::StrategyKind;

    fn evaluate(config: &Configuration, kind: StrategyKind, levels: usize) -> EvaluationReport {
        Evaluator::new(config, || kind.build(config), levels)
            .evaluate()
            .unwrap()
    }

    fn totals(report: &EvaluationReport) -> (usize, usize, usize, usize) {
        (
            report.games_played,
            report.games_won,
            report.total_rounds,
            report.max_rounds,
        )
    }

    #[test]
    fn small_configuration_totals() {
        let config = Configuration::new("ABCD", 2, false).unwrap();
        for (kind, expected) in [
            (StrategyKind::Simple, (16, 16, 53, 5)),
            (StrategyKind::Knuth, (16, 16, 45, 4)),
            (StrategyKind::ExpectedSize, (16, 16, 45, 4)),
            (StrategyKind::Percentile(0.0), (16, 16, 45, 4)),
            (StrategyKind::Dumb, (16, 1, 151, 10)),
        ] {
            assert_eq!(totals(&evaluate(&config, kind, 1)), expected, "{kind}");
        }
    }

    #[test]
    fn unique_configuration_totals() {
        let config = Configuration::new("ABCD", 2, true).unwrap();
        for kind in [StrategyKind::Simple, StrategyKind::Knuth] {
            assert_eq!(totals(&evaluate(&config, kind, 1)), (12, 12, 30, 3), "{kind}");
        }
    }

    #[test]
    fn cache_depth_does_not_change_results() {
        let config = Configuration::new("ABCD", 2, false).unwrap();
        for kind in [StrategyKind::Simple, StrategyKind::Knuth, StrategyKind::ExpectedSize] {
            let live = evaluate(&config, kind, 0);
            for levels in 1..=3 {
                assert_eq!(evaluate(&config, kind, levels), live, "{kind} at depth {levels}");
            }
        }
    }

    #[test]
    fn report_statistics() {
        let config = Configuration::new("ABCD", 2, false).unwrap();
        let report = evaluate(&config, StrategyKind::Knuth, 1);

        assert_eq!(report.rounds.len(), 16);
        assert_eq!(report.rounds.sum(), report.total_rounds);
        assert!((report.average_rounds().unwrap() - 45.0 / 16.0).abs() < 1e-9);
        assert_eq!(report.percentile(100.0), Some(4));
        assert!((report.win_rate().unwrap() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_report_has_no_statistics() {
        let report = EvaluationReport::default();
        assert_eq!(report.average_rounds(), None);
        assert_eq!(report.win_rate(), None);
    }

    #[test]
    fn callback_sees_every_secret_in_order() {
        let config = Configuration::new("ABCD", 2, false).unwrap();
        let mut seen = Vec::new();
        Evaluator::new(&config, || StrategyKind::Simple.build(&config), 1)
            .evaluate_with(|secret, outcome| {
                assert!(outcome.won);
                seen.push(*secret);
            })
            .unwrap();
        assert_eq!(seen, config.all_codes());
    }

    #[test]
    fn max_rounds_caps_games() {
        let config = Configuration::new("ABCD", 2, false).unwrap();
        let report = Evaluator::new(&config, || StrategyKind::Dumb.build(&config), 0)
            .with_max_rounds(3)
            .evaluate()
            .unwrap();
        assert_eq!(totals(&report), (16, 1, 46, 3));
    }
}
