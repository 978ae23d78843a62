//! Core domain types for Mastermind
//!
//! Codes, scores and the configuration that ties them together. Nothing in
//! here knows about strategies or games.

mod code;
mod config;
mod score;

pub use code::{Code, MAX_LENGTH, VALID_SYMBOLS};
pub use config::Configuration;
pub use score::Score;
pub(crate) use score::PACKED_SCORES;
