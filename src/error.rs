//! Error type shared by the whole engine

use crate::core::Score;
use std::io;
use thiserror::Error;

/// Everything that can go wrong while setting up or playing Mastermind
#[derive(Debug, Error)]
pub enum MastermindError {
    /// Code length outside `1..=MAX_LENGTH`
    #[error("code length must be between 1 and {max}, got {0}", max = crate::core::MAX_LENGTH)]
    InvalidLength(usize),

    /// Alphabet rejected by the configuration constructor
    #[error("invalid alphabet {alphabet:?}: {reason}")]
    InvalidAlphabet {
        alphabet: String,
        reason: &'static str,
    },

    /// A code that does not belong to the configuration (or to the symbol universe)
    #[error("invalid code {0:?}")]
    InvalidCode(String),

    /// A score that no guess can produce under the configuration
    #[error("score {0} is not achievable")]
    InvalidScore(Score),

    /// Unknown strategy name or bad strategy parameter
    #[error("invalid strategy: {0}")]
    InvalidStrategy(String),

    /// Feedback typed by a human that could not be parsed
    #[error("invalid input {0:?}, expected a non-negative number")]
    InvalidInput(String),

    /// No code is consistent with the scores given so far
    #[error("no code is consistent with the scores given so far")]
    Exhausted,

    #[error(transparent)]
    Io(#[from] io::Error),
}
