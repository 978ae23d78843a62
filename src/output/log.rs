//! Verbosity-gated diagnostics on stderr
//!
//! The engine reports progress as [`GameEvent`]s; the logger decides which of
//! them reach the terminal.

use crate::game::GameEvent;
use colored::Colorize;
use std::fmt::Display;

/// How much to report
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Level {
    /// Errors only
    Quiet,
    /// Setup steps and summaries
    #[default]
    Info,
    /// Every guess of every game
    Debug,
}

impl Level {
    /// Map `-q` and the number of `-v` flags to a level
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Info,
            (false, _) => Self::Debug,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    level: Level,
}

impl Logger {
    #[must_use]
    pub const fn new(level: Level) -> Self {
        Self { level }
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level != Level::Quiet && self.level >= level
    }

    pub fn info(&self, message: impl Display) {
        if self.enabled(Level::Info) {
            eprintln!("{} {message}", "info:".green().bold());
        }
    }

    pub fn debug(&self, message: impl Display) {
        if self.enabled(Level::Debug) {
            eprintln!("{} {message}", "debug:".blue().bold());
        }
    }

    /// Report a game event at debug level
    pub fn event(&self, event: &GameEvent) {
        if self.enabled(Level::Debug) {
            self.debug(render_event(event));
        }
    }
}

/// One-line description of a game event
#[must_use]
pub fn render_event(event: &GameEvent) -> String {
    match *event {
        GameEvent::Started { max_rounds } => format!("game started, {max_rounds} rounds allowed"),
        GameEvent::Guessed {
            round,
            guess,
            score,
            precomputed,
        } => {
            let source = if precomputed { " (precomputed)" } else { "" };
            format!("round {round}: {guess} => {score}{source}")
        }
        GameEvent::Finished { won, rounds } => {
            let result = if won { "won" } else { "lost" };
            format!("game {result} after {rounds} rounds")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Score};

    #[test]
    fn levels_from_flags() {
        assert_eq!(Level::from_flags(0, false), Level::Info);
        assert_eq!(Level::from_flags(2, false), Level::Debug);
        assert_eq!(Level::from_flags(3, true), Level::Quiet);
    }

    #[test]
    fn enabled_levels() {
        let logger = Logger::new(Level::Info);
        assert!(logger.enabled(Level::Info));
        assert!(!logger.enabled(Level::Debug));

        let quiet = Logger::new(Level::Quiet);
        assert!(!quiet.enabled(Level::Info));
        assert!(!quiet.enabled(Level::Quiet));
    }

    #[test]
    fn renders_guesses() {
        let event = GameEvent::Guessed {
            round: 2,
            guess: Code::new("ABCD").unwrap(),
            score: Score::new(1, 2),
            precomputed: true,
        };
        assert_eq!(render_event(&event), "round 2: ABCD => (1, 2) (precomputed)");
    }

    #[test]
    fn renders_game_bounds() {
        assert_eq!(
            render_event(&GameEvent::Started { max_rounds: 7 }),
            "game started, 7 rounds allowed"
        );
        assert_eq!(
            render_event(&GameEvent::Finished {
                won: false,
                rounds: 7
            }),
            "game lost after 7 rounds"
        );
    }
}
