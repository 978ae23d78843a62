//! Self-play against a known secret
//!
//! Solves a specific (or random) secret code and returns the solution path.

use crate::core::{Code, Configuration, Score};
use crate::error::MastermindError;
use crate::game::{DEFAULT_MAX_ROUNDS, Game, GameEvent, SecretPlayer};
use crate::output::log::Logger;
use crate::solver::elimination::filter_candidates_unchecked;
use crate::solver::{GuessCache, StrategyKind};

/// What to solve
pub struct SolveConfig {
    /// Secret code, or `None` to pick one at random
    pub secret: Option<String>,
    pub max_rounds: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: Option<String>) -> Self {
        Self {
            secret,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub secret: Code,
    pub strategy: StrategyKind,
    pub success: bool,
    pub steps: Vec<SolveStep>,
}

/// A single guess in the solution
pub struct SolveStep {
    pub guess: Code,
    pub score: Score,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub precomputed: bool,
}

/// Solve a secret code with the given strategy
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid code for the configuration
/// - The strategy runs out of candidates
pub fn solve_code(
    config: &Configuration,
    kind: StrategyKind,
    cache: &GuessCache,
    solve: SolveConfig,
    logger: Logger,
) -> Result<SolveResult, MastermindError> {
    let secret = match solve.secret {
        Some(text) => config.code(&text)?,
        None => config.random_code(&mut rand::rng()),
    };
    logger.debug(format_args!("secret is {secret}"));

    let player = SecretPlayer::new(config, secret)?;
    let mut candidates = config.all_codes().to_vec();
    let mut steps = Vec::new();

    let outcome = Game::new(config, kind.build(config), player)
        .with_cache(cache)
        .with_max_rounds(solve.max_rounds)
        .with_observer(|event| {
            logger.event(event);
            if let GameEvent::Guessed {
                guess,
                score,
                precomputed,
                ..
            } = *event
            {
                let candidates_before = candidates.len();
                candidates = filter_candidates_unchecked(config, &guess, score, &candidates);
                steps.push(SolveStep {
                    guess,
                    score,
                    candidates_before,
                    candidates_after: candidates.len(),
                    precomputed,
                });
            }
        })
        .play()?;

    Ok(SolveResult {
        secret,
        strategy: kind,
        success: outcome.won,
        steps,
    })
}
