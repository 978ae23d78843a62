//! A single game between a strategy and a player
//!
//! The game loop asks the precomputation cache first, falls back to the live
//! strategy, and reports progress through an optional observer instead of
//! printing anything itself.

mod player;

pub use player::{Player, SecretPlayer};

use crate::core::{Code, Configuration, Score};
use crate::error::MastermindError;
use crate::solver::{GuessCache, Strategy};

/// Rounds allowed when nothing else is configured
pub const DEFAULT_MAX_ROUNDS: usize = 7;

/// Progress notifications emitted while a game runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started {
        max_rounds: usize,
    },
    Guessed {
        round: usize,
        guess: Code,
        score: Score,
        /// The guess came from the precomputation cache
        precomputed: bool,
    },
    Finished {
        won: bool,
        rounds: usize,
    },
}

/// Result of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub won: bool,
    pub rounds: usize,
    /// Every guess with its score, in play order
    pub guesses: Vec<(Code, Score)>,
}

type Observer<'a> = Box<dyn FnMut(&GameEvent) + 'a>;

/// One game, consumed by [`Game::play`]
///
/// # Examples
/// ```
/// use mastermind::core::Configuration;
/// use mastermind::game::{Game, SecretPlayer};
/// use mastermind::solver::StrategyKind;
///
/// let config = Configuration::new("ABCD", 2, false).unwrap();
/// let player = SecretPlayer::new(&config, config.code("DC").unwrap()).unwrap();
/// let outcome = Game::new(&config, StrategyKind::Knuth.build(&config), player)
///     .play()
///     .unwrap();
///
/// assert!(outcome.won);
/// assert_eq!(outcome.guesses.last().unwrap().0.to_string(), "DC");
/// ```
pub struct Game<'a, S, P> {
    config: &'a Configuration,
    strategy: S,
    player: P,
    cache: Option<&'a GuessCache>,
    max_rounds: usize,
    observer: Option<Observer<'a>>,
}

impl<'a, S: Strategy, P: Player> Game<'a, S, P> {
    #[must_use]
    pub fn new(config: &'a Configuration, strategy: S, player: P) -> Self {
        Self {
            config,
            strategy,
            player,
            cache: None,
            max_rounds: DEFAULT_MAX_ROUNDS,
            observer: None,
        }
    }

    /// Take guesses from `cache` while it covers the current round
    #[must_use]
    pub fn with_cache(mut self, cache: &'a GuessCache) -> Self {
        self.cache = Some(cache);
        self
    }

    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Receive a [`GameEvent`] for every step of the game
    #[must_use]
    pub fn with_observer(mut self, observer: impl FnMut(&GameEvent) + 'a) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Play until the secret is found or the rounds run out
    ///
    /// # Errors
    /// - `Exhausted` if the strategy runs out of consistent codes, which means
    ///   the player gave contradictory scores
    /// - `InvalidScore` if the player answers with an unachievable score
    /// - any error raised by the player itself
    pub fn play(mut self) -> Result<GameOutcome, MastermindError> {
        let winning = self.config.winning_score();
        let mut history: Vec<Score> = Vec::new();
        let mut guesses = Vec::new();
        let mut won = false;

        self.player.start_game()?;
        self.emit(&GameEvent::Started {
            max_rounds: self.max_rounds,
        });

        while guesses.len() < self.max_rounds {
            let cached = self.cache.and_then(|cache| cache.lookup(&history));
            let guess = match cached {
                Some(guess) => guess,
                None => self
                    .strategy
                    .next_guess()
                    .ok_or(MastermindError::Exhausted)?,
            };

            let score = self.player.score(&guess)?;
            if !self.config.is_valid_score(score) {
                return Err(MastermindError::InvalidScore(score));
            }

            self.strategy.record_score(guess, score);
            history.push(score);
            guesses.push((guess, score));
            self.emit(&GameEvent::Guessed {
                round: guesses.len(),
                guess,
                score,
                precomputed: cached.is_some(),
            });

            if score == winning {
                won = true;
                break;
            }
        }

        let rounds = guesses.len();
        self.player.end_game(won, rounds)?;
        self.emit(&GameEvent::Finished { won, rounds });

        Ok(GameOutcome {
            won,
            rounds,
            guesses,
        })
    }

    fn emit(&mut self, event: &GameEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer(event);
        }
    }
}
