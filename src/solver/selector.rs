//! Best-guess selection over the whole code universe

use super::elimination::partition_sizes;
use super::rating::Rater;
use crate::core::{Code, Configuration};
use rayon::prelude::*;

/// Pick the best-rated code from the full universe
///
/// The scan starts from the first candidate with rating 0. A code replaces the
/// current best if it rates strictly higher, or if it ties within `epsilon`
/// and is itself a candidate while the current best is not. Ratings are
/// computed in parallel but the scan is sequential, so the outcome matches a
/// plain loop over `config.all_codes()`.
///
/// `candidates` must be sorted in canonical order. Returns `None` when it is
/// empty.
///
/// # Examples
/// ```
/// use mastermind::core::Configuration;
/// use mastermind::solver::rating::Rater;
/// use mastermind::solver::select_best_guess;
///
/// let config = Configuration::new("ABCD", 2, false).unwrap();
/// let best = select_best_guess(&config, Rater::WorstCase, 1e-7, config.all_codes());
/// assert_eq!(best.unwrap().to_string(), "AB");
/// ```
#[must_use]
pub fn select_best_guess(
    config: &Configuration,
    rater: Rater,
    epsilon: f64,
    candidates: &[Code],
) -> Option<Code> {
    let first = *candidates.first()?;
    if !rater.needs_partitions() {
        return Some(first);
    }

    let ratings: Vec<f64> = config
        .all_codes()
        .par_iter()
        .map(|guess| rater.rate(&partition_sizes(config, guess, candidates)))
        .collect();

    let mut best = first;
    let mut best_possible = true;
    let mut max_rating = 0.0_f64;
    for (guess, rating) in config.all_codes().iter().zip(ratings) {
        let possible = candidates.binary_search(guess).is_ok();
        let better = rating > max_rating
            || ((max_rating - rating).abs() < epsilon && possible && !best_possible);
        if better {
            best = *guess;
            best_possible = possible;
            max_rating = max_rating.max(rating);
        }
    }

    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Score;
    use crate::solver::elimination::filter_candidates_unchecked;

    fn setup() -> Configuration {
        Configuration::new("ABCD", 2, false).unwrap()
    }

    #[test]
    fn empty_candidates_give_nothing() {
        let config = setup();
        assert_eq!(select_best_guess(&config, Rater::WorstCase, 1e-7, &[]), None);
        assert_eq!(select_best_guess(&config, Rater::Simple, 1e-7, &[]), None);
    }

    #[test]
    fn simple_takes_first_candidate() {
        let config = setup();
        let candidates = [config.code("BC").unwrap(), config.code("DA").unwrap()];
        let best = select_best_guess(&config, Rater::Simple, 1e-7, &candidates);
        assert_eq!(best, Some(candidates[0]));
    }

    #[test]
    fn tie_prefers_remaining_candidate() {
        let config = setup();
        let ab = config.code("AB").unwrap();
        let candidates = filter_candidates_unchecked(&config, &ab, Score::new(1, 0), config.all_codes());

        // BC, BD, CA, DA: BC splits them as well as anything and is a candidate
        let best = select_best_guess(&config, Rater::WorstCase, 1e-7, &candidates).unwrap();
        assert_eq!(best.to_string(), "BC");
        assert!(candidates.contains(&best));
    }

    #[test]
    fn single_candidate_is_returned() {
        let config = setup();
        let only = [config.code("CD").unwrap()];
        for rater in [Rater::WorstCase, Rater::ExpectedSize, Rater::Percentile(50.0)] {
            assert_eq!(select_best_guess(&config, rater, 1e-7, &only), Some(only[0]));
        }
    }
}
