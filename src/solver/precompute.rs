//! Guess precomputation
//!
//! The first few guesses of a deterministic strategy depend only on the
//! scores seen so far. Computing them once per score history lets an
//! exhaustive evaluation skip the expensive early rounds for every game.

use super::strategy::Strategy;
use crate::core::{Code, Configuration, Score};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Guesses of one strategy keyed by the score history that leads to them
#[derive(Debug, Clone, Default)]
pub struct GuessCache {
    depth: usize,
    guesses: FxHashMap<Vec<Score>, Code>,
}

impl GuessCache {
    /// Precompute the first `depth` rounds of the strategy made by `factory`
    ///
    /// Level `d` holds the guess a fresh strategy makes after being fed `d`
    /// scores for the guesses already stored along that path. Winning scores
    /// end a path, and so does a history no code can satisfy. Every level is
    /// computed in parallel from the one above it.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Configuration, Score};
    /// use mastermind::solver::{GuessCache, StrategyKind};
    ///
    /// let config = Configuration::new("ABCD", 2, false).unwrap();
    /// let cache = GuessCache::build(&config, || StrategyKind::Knuth.build(&config), 2);
    ///
    /// assert_eq!(cache.lookup(&[]).unwrap().to_string(), "AB");
    /// assert_eq!(cache.lookup(&[Score::ZERO]).unwrap().to_string(), "CC");
    /// assert_eq!(cache.lookup(&[Score::ZERO, Score::ZERO]), None);
    /// ```
    #[must_use]
    pub fn build<F, S>(config: &Configuration, factory: F, depth: usize) -> Self
    where
        F: Fn() -> S + Sync,
        S: Strategy,
    {
        let winning = config.winning_score();
        let mut guesses: FxHashMap<Vec<Score>, Code> = FxHashMap::default();
        let mut frontier: Vec<Vec<Score>> = if depth > 0 { vec![Vec::new()] } else { Vec::new() };

        for level in 0..depth {
            let found: Vec<(Vec<Score>, Code)> = frontier
                .par_iter()
                .filter_map(|history| {
                    let mut strategy = factory();
                    for (i, &score) in history.iter().enumerate() {
                        let guess = *guesses.get(&history[..i])?;
                        strategy.record_score(guess, score);
                    }
                    strategy.next_guess().map(|guess| (history.clone(), guess))
                })
                .collect();

            frontier = if level + 1 < depth {
                found
                    .iter()
                    .flat_map(|(history, _)| {
                        config
                            .all_scores()
                            .iter()
                            .filter(move |&&score| score != winning)
                            .map(move |&score| {
                                let mut next = history.clone();
                                next.push(score);
                                next
                            })
                    })
                    .collect()
            } else {
                Vec::new()
            };

            guesses.extend(found);
        }

        Self { depth, guesses }
    }

    /// Cache with no precomputed rounds
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Precomputed guess after `history`
    ///
    /// `None` past the cache depth or along a branch that was never reached;
    /// the caller falls back to the live strategy.
    #[must_use]
    pub fn lookup(&self, history: &[Score]) -> Option<Code> {
        if history.len() >= self.depth {
            return None;
        }
        self.guesses.get(history).copied()
    }

    /// Number of rounds covered
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Number of stored guesses
    #[must_use]
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::StrategyKind;

    fn setup() -> Configuration {
        Configuration::new("ABCD", 2, false).unwrap()
    }

    #[test]
    fn depth_zero_is_empty() {
        let config = setup();
        let cache = GuessCache::build(&config, || StrategyKind::Knuth.build(&config), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.depth(), 0);
        assert_eq!(cache.lookup(&[]), None);
    }

    #[test]
    fn depth_one_holds_first_guess() {
        let config = setup();
        let cache = GuessCache::build(&config, || StrategyKind::Simple.build(&config), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.lookup(&[]), Some(config.code("AA").unwrap()));
        assert_eq!(cache.lookup(&[Score::ZERO]), None);
    }

    #[test]
    fn unreachable_branches_are_absent() {
        let config = setup();
        let cache = GuessCache::build(&config, || StrategyKind::Simple.build(&config), 2);

        // AA can never score a cow, so nothing follows (1, 0)
        assert_eq!(cache.lookup(&[Score::new(1, 0)]), None);
        assert_eq!(cache.lookup(&[Score::ZERO]), Some(config.code("BB").unwrap()));
        assert_eq!(cache.lookup(&[Score::new(0, 1)]), Some(config.code("AB").unwrap()));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn winning_score_is_not_expanded() {
        let config = setup();
        let cache = GuessCache::build(&config, || StrategyKind::Knuth.build(&config), 2);
        assert_eq!(cache.lookup(&[config.winning_score()]), None);
        assert_eq!(cache.len(), 5);
    }

    #[test]
    fn matches_fresh_strategy_on_every_prefix() {
        let config = Configuration::new("ABCDE", 3, false).unwrap();
        for kind in [StrategyKind::Knuth, StrategyKind::ExpectedSize] {
            let cache = GuessCache::build(&config, || kind.build(&config), 3);

            let mut paths = vec![Vec::new()];
            while let Some(history) = paths.pop() {
                let Some(cached) = cache.lookup(&history) else {
                    continue;
                };

                let mut strategy = kind.build(&config);
                for i in 0..history.len() {
                    let guess = cache.lookup(&history[..i]).unwrap();
                    strategy.record_score(guess, history[i]);
                }
                assert_eq!(strategy.next_guess(), Some(cached), "{kind} after {history:?}");

                for &score in config.all_scores() {
                    if score != config.winning_score() {
                        let mut next = history.clone();
                        next.push(score);
                        paths.push(next);
                    }
                }
            }
        }
    }
}
