//! Guess selection strategies
//!
//! Defines the Strategy trait, the strategy family and its runtime selector.

use super::engine::EliminationStrategy;
use super::rating::Rater;
use crate::core::{Code, Configuration, Score};
use crate::error::MastermindError;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// Per-game guessing policy
///
/// A strategy instance serves exactly one game: it accumulates the scores it
/// is told about and proposes guesses consistent with them.
pub trait Strategy {
    /// Propose the next guess, or `None` if no code fits the recorded scores
    fn next_guess(&mut self) -> Option<Code>;

    /// Record the score a guess received
    ///
    /// Recording the same pair twice has no further effect.
    fn record_score(&mut self, guess: Code, score: Score);

    /// Score previously recorded for `guess`
    fn score_of(&self, guess: &Code) -> Option<Score>;
}

/// Ignores all feedback and always guesses the first code
///
/// A baseline that only wins when the secret happens to be that code.
#[derive(Debug, Clone)]
pub struct DumbStrategy {
    first: Code,
    history: FxHashMap<Code, Score>,
}

impl DumbStrategy {
    #[must_use]
    pub fn new(config: &Configuration) -> Self {
        Self {
            first: config.all_codes()[0],
            history: FxHashMap::default(),
        }
    }
}

impl Strategy for DumbStrategy {
    fn next_guess(&mut self) -> Option<Code> {
        Some(self.first)
    }

    fn record_score(&mut self, guess: Code, score: Score) {
        self.history.insert(guess, score);
    }

    fn score_of(&self, guess: &Code) -> Option<Score> {
        self.history.get(guess).copied()
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum AnyStrategy<'a> {
    /// Narrows candidates and rates every code
    Eliminating(EliminationStrategy<'a>),
    /// Always the same guess
    Dumb(DumbStrategy),
}

impl Strategy for AnyStrategy<'_> {
    fn next_guess(&mut self) -> Option<Code> {
        match self {
            Self::Eliminating(s) => s.next_guess(),
            Self::Dumb(s) => s.next_guess(),
        }
    }

    fn record_score(&mut self, guess: Code, score: Score) {
        match self {
            Self::Eliminating(s) => s.record_score(guess, score),
            Self::Dumb(s) => s.record_score(guess, score),
        }
    }

    fn score_of(&self, guess: &Code) -> Option<Score> {
        match self {
            Self::Eliminating(s) => s.score_of(guess),
            Self::Dumb(s) => s.score_of(guess),
        }
    }
}

/// The family of available strategies
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StrategyKind {
    /// First remaining candidate
    #[default]
    Simple,
    /// Minimize the worst-case partition
    Knuth,
    /// Minimize the expected partition size
    ExpectedSize,
    /// Maximize a percentile of eliminated codes (`0.0..=100.0`)
    Percentile(f64),
    /// Always the first code
    Dumb,
}

impl StrategyKind {
    /// Create a strategy kind from its name
    ///
    /// Supported names: "simple", "knuth", "expected-size" ("esize", "exp_size"),
    /// "percentile" ("pharaox") and "dumb". `percentile` is only used by the
    /// percentile strategy.
    ///
    /// # Errors
    /// `InvalidStrategy` for an unknown name or a percentile outside `0..=100`.
    ///
    /// # Examples
    /// ```
    /// use mastermind::solver::StrategyKind;
    ///
    /// assert_eq!(StrategyKind::from_name("esize", 0.0).unwrap(), StrategyKind::ExpectedSize);
    /// assert_eq!(
    ///     StrategyKind::from_name("pharaox", 25.0).unwrap(),
    ///     StrategyKind::Percentile(25.0)
    /// );
    /// assert!(StrategyKind::from_name("random", 0.0).is_err());
    /// ```
    pub fn from_name(name: &str, percentile: f64) -> Result<Self, MastermindError> {
        match name.to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "knuth" | "minimax" => Ok(Self::Knuth),
            "expected-size" | "esize" | "exp_size" => Ok(Self::ExpectedSize),
            "percentile" | "pharaox" => {
                if (0.0..=100.0).contains(&percentile) {
                    Ok(Self::Percentile(percentile))
                } else {
                    Err(MastermindError::InvalidStrategy(format!(
                        "percentile must be between 0 and 100, got {percentile}"
                    )))
                }
            }
            "dumb" => Ok(Self::Dumb),
            _ => Err(MastermindError::InvalidStrategy(format!(
                "unknown strategy {name:?}"
            ))),
        }
    }

    /// Fresh strategy for one game
    #[must_use]
    pub fn build(self, config: &Configuration) -> AnyStrategy<'_> {
        let rater = match self {
            Self::Simple => Rater::Simple,
            Self::Knuth => Rater::WorstCase,
            Self::ExpectedSize => Rater::ExpectedSize,
            Self::Percentile(p) => Rater::Percentile(p),
            Self::Dumb => return AnyStrategy::Dumb(DumbStrategy::new(config)),
        };
        AnyStrategy::Eliminating(EliminationStrategy::new(config, rater))
    }
}

impl FromStr for StrategyKind {
    type Err = MastermindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s, 0.0)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::Knuth => write!(f, "knuth"),
            Self::ExpectedSize => write!(f, "expected-size"),
            Self::Percentile(p) => write!(f, "percentile({p})"),
            Self::Dumb => write!(f, "dumb"),
        }
    }
}
