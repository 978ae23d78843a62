//! Candidate-eliminating strategy
//!
//! Holds the per-game state shared by every rating strategy: the scores
//! recorded so far and the candidates still consistent with them.

use super::elimination::filter_candidates_unchecked;
use super::rating::Rater;
use super::selector::select_best_guess;
use super::strategy::Strategy;
use crate::core::{Code, Configuration, Score};
use rustc_hash::{FxHashMap, FxHashSet};

/// Ratings closer than this count as a tie
pub const DEFAULT_TIE_EPSILON: f64 = 1e-7;

/// Strategy that narrows the candidates and rates the whole universe
///
/// Recorded scores are applied lazily, on the next call that needs the
/// candidates, and each distinct (guess, score) pair narrows the set once.
///
/// # Examples
/// ```
/// use mastermind::core::{Configuration, Score};
/// use mastermind::solver::{EliminationStrategy, Strategy};
/// use mastermind::solver::rating::Rater;
///
/// let config = Configuration::new("ABCD", 2, false).unwrap();
/// let mut strategy = EliminationStrategy::new(&config, Rater::WorstCase);
///
/// let first = strategy.next_guess().unwrap();
/// assert_eq!(first.to_string(), "AB");
///
/// strategy.record_score(first, Score::ZERO);
/// assert_eq!(strategy.next_guess().unwrap().to_string(), "CC");
/// ```
#[derive(Debug, Clone)]
pub struct EliminationStrategy<'a> {
    config: &'a Configuration,
    rater: Rater,
    epsilon: f64,
    possible: Vec<Code>,
    history: FxHashMap<Code, Score>,
    pending: Vec<(Code, Score)>,
    applied: FxHashSet<(Code, Score)>,
}

impl<'a> EliminationStrategy<'a> {
    #[must_use]
    pub fn new(config: &'a Configuration, rater: Rater) -> Self {
        Self {
            config,
            rater,
            epsilon: DEFAULT_TIE_EPSILON,
            possible: config.all_codes().to_vec(),
            history: FxHashMap::default(),
            pending: Vec::new(),
            applied: FxHashSet::default(),
        }
    }

    /// Replace the tie tolerance
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    #[must_use]
    pub const fn rater(&self) -> Rater {
        self.rater
    }

    /// Codes still consistent with every recorded score
    pub fn possible_codes(&mut self) -> &[Code] {
        self.apply_pending();
        &self.possible
    }

    fn apply_pending(&mut self) {
        for (guess, score) in std::mem::take(&mut self.pending) {
            if self.applied.insert((guess, score)) {
                self.possible =
                    filter_candidates_unchecked(self.config, &guess, score, &self.possible);
            }
        }
    }
}

impl Strategy for EliminationStrategy<'_> {
    fn next_guess(&mut self) -> Option<Code> {
        self.apply_pending();
        select_best_guess(self.config, self.rater, self.epsilon, &self.possible)
    }

    fn record_score(&mut self, guess: Code, score: Score) {
        debug_assert!(self.config.is_valid(&guess) && self.config.is_valid_score(score));
        self.history.insert(guess, score);
        let pair = (guess, score);
        if !self.applied.contains(&pair) && !self.pending.contains(&pair) {
            self.pending.push(pair);
        }
    }

    fn score_of(&self, guess: &Code) -> Option<Score> {
        self.history.get(guess).copied()
    }
}
