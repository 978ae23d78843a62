//! Interactive play
//!
//! The computer guesses while a human keeps the secret and answers each
//! guess with the number of cows and bulls.

use crate::core::{Code, Configuration, MAX_LENGTH, Score};
use crate::error::MastermindError;
use crate::game::{Game, GameOutcome, Player};
use crate::output::log::Logger;
use crate::solver::{GuessCache, StrategyKind};
use std::io::{self, BufRead, Write};

/// Player that asks a human for scores over text streams
pub struct ConsolePlayer<'a, R, W> {
    config: &'a Configuration,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> ConsolePlayer<'a, R, W> {
    pub const fn new(config: &'a Configuration, input: R, output: W) -> Self {
        Self {
            config,
            input,
            output,
        }
    }

    /// Give back the output stream, mostly for inspecting what was written
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, prompt: &str) -> Result<u8, MastermindError> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MastermindError::InvalidInput(String::new()));
        }

        let text = line.trim();
        match text.parse::<u8>() {
            Ok(n) if usize::from(n) <= MAX_LENGTH => Ok(n),
            _ => Err(MastermindError::InvalidInput(text.to_string())),
        }
    }
}

impl<R: BufRead, W: Write> Player for ConsolePlayer<'_, R, W> {
    fn start_game(&mut self) -> Result<(), MastermindError> {
        writeln!(
            self.output,
            "Think of a code of length {} over {}{}. I will try to guess it.",
            self.config.length(),
            self.config.alphabet(),
            if self.config.has_unique_symbols() {
                " without repeated symbols"
            } else {
                ""
            }
        )?;
        Ok(())
    }

    fn score(&mut self, guess: &Code) -> Result<Score, MastermindError> {
        writeln!(self.output, "Guess: {guess}")?;
        let cows = self.ask("Cows")?;
        let bulls = self.ask("Bulls")?;

        let score = Score::new(cows, bulls);
        if !self.config.is_valid_score(score) {
            return Err(MastermindError::InvalidScore(score));
        }
        Ok(score)
    }

    fn end_game(&mut self, won: bool, rounds: usize) -> Result<(), MastermindError> {
        if won {
            writeln!(self.output, "I guessed your code in {rounds} rounds!")?;
        } else {
            writeln!(self.output, "I could not guess your code in {rounds} rounds.")?;
        }
        Ok(())
    }
}

/// Play one game against the human on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading feedback fails, the feedback is malformed, or
/// contradictory scores leave no possible code.
pub fn run_play(
    config: &Configuration,
    kind: StrategyKind,
    cache: &GuessCache,
    max_rounds: usize,
    logger: Logger,
) -> Result<GameOutcome, MastermindError> {
    let stdin = io::stdin();
    let player = ConsolePlayer::new(config, stdin.lock(), io::stdout());

    Game::new(config, kind.build(config), player)
        .with_cache(cache)
        .with_max_rounds(max_rounds)
        .with_observer(|event| logger.event(event))
        .play()
}
