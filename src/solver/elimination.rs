//! Candidate elimination
//!
//! Narrows a candidate set down to the codes consistent with an observed
//! score, and measures how a guess would split a candidate set.

use crate::core::{Code, Configuration, PACKED_SCORES, Score};
use crate::error::MastermindError;

/// Keep the candidates that would have produced `score` against `guess`
///
/// Validates the guess and the score first; use
/// [`filter_candidates_unchecked`] on hot paths where both are known good.
///
/// # Errors
/// `InvalidCode` if the guess does not belong to the configuration,
/// `InvalidScore` if the score is not achievable.
///
/// # Examples
/// ```
/// use mastermind::core::{Configuration, Score};
/// use mastermind::solver::elimination::filter_candidates;
///
/// let config = Configuration::new("ABCD", 2, false).unwrap();
/// let guess = config.code("AB").unwrap();
/// let left = filter_candidates(&config, &guess, Score::new(2, 0), config.all_codes()).unwrap();
/// assert_eq!(left, vec![config.code("BA").unwrap()]);
/// ```
pub fn filter_candidates(
    config: &Configuration,
    guess: &Code,
    score: Score,
    candidates: &[Code],
) -> Result<Vec<Code>, MastermindError> {
    if !config.is_valid(guess) {
        return Err(MastermindError::InvalidCode(guess.to_string()));
    }
    if !config.is_valid_score(score) {
        return Err(MastermindError::InvalidScore(score));
    }
    Ok(filter_candidates_unchecked(config, guess, score, candidates))
}

/// Same as [`filter_candidates`] without validation
///
/// Candidate order is preserved.
#[must_use]
pub fn filter_candidates_unchecked(
    config: &Configuration,
    guess: &Code,
    score: Score,
    candidates: &[Code],
) -> Vec<Code> {
    candidates
        .iter()
        .filter(|candidate| config.evaluate_unchecked(guess, candidate) == score)
        .copied()
        .collect()
}

/// Size of every partition `guess` splits the candidates into
///
/// The result is aligned with [`Configuration::all_scores`]: entry `i` counts
/// the candidates scoring `all_scores()[i]`, so empty partitions appear as zero.
#[must_use]
pub fn partition_sizes(config: &Configuration, guess: &Code, candidates: &[Code]) -> Vec<usize> {
    let mut counts = [0usize; PACKED_SCORES];
    for candidate in candidates {
        counts[config.evaluate_unchecked(guess, candidate).packed()] += 1;
    }

    config
        .all_scores()
        .iter()
        .map(|score| counts[score.packed()])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> Configuration {
        Configuration::new("ABCD", 2, false).unwrap()
    }

    #[test]
    fn filter_keeps_consistent_codes_in_order() {
        let config = setup();
        let guess = config.code("AB").unwrap();
        let left = filter_candidates(&config, &guess, Score::new(0, 1), config.all_codes()).unwrap();

        let text: Vec<String> = left.iter().map(ToString::to_string).collect();
        assert_eq!(text, ["AA", "AC", "AD", "BB", "CB", "DB"]);
    }

    #[test]
    fn filter_keeps_hidden_code() {
        let config = Configuration::new("ABCDE", 3, false).unwrap();
        let secret = config.code("CAC").unwrap();
        for guess in config.all_codes() {
            let score = config.evaluate_unchecked(guess, &secret);
            let left = filter_candidates_unchecked(&config, guess, score, config.all_codes());
            assert!(left.contains(&secret), "{guess} lost the secret");
        }
    }

    #[test]
    fn filter_with_winning_score_leaves_guess() {
        let config = setup();
        let guess = config.code("DC").unwrap();
        let left =
            filter_candidates(&config, &guess, config.winning_score(), config.all_codes()).unwrap();
        assert_eq!(left, vec![guess]);
    }

    #[test]
    fn filter_rejects_invalid_input() {
        let config = setup();
        let guess = config.code("AB").unwrap();
        assert!(matches!(
            filter_candidates(&config, &guess, Score::new(1, 1), config.all_codes()),
            Err(MastermindError::InvalidScore(_))
        ));

        let foreign = Code::new("AE").unwrap();
        assert!(matches!(
            filter_candidates(&config, &foreign, Score::ZERO, config.all_codes()),
            Err(MastermindError::InvalidCode(_))
        ));
    }

    #[test]
    fn partitions_cover_all_candidates() {
        let config = setup();
        let guess = config.code("AB").unwrap();
        let sizes = partition_sizes(&config, &guess, config.all_codes());

        // (0,0) (1,0) (2,0) (0,1) (0,2)
        assert_eq!(sizes, vec![4, 4, 1, 6, 1]);
        assert_eq!(sizes.iter().sum::<usize>(), 16);
    }

    #[test]
    fn partitions_include_empty_scores() {
        let config = setup();
        let guess = config.code("AA").unwrap();
        let sizes = partition_sizes(&config, &guess, config.all_codes());

        // A repeated guess never scores cows here
        assert_eq!(sizes, vec![9, 0, 0, 6, 1]);
    }
}
