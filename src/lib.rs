//! Mastermind Solver
//!
//! A solver for generalized Mastermind / Bulls and Cows: any alphabet drawn
//! from `0-9A-H`, codes of length 1 to 9, with or without repeated symbols.
//! Guesses come from candidate elimination rated by Knuth's minimax, expected
//! partition size, or a percentile of eliminated codes.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Configuration, Score};
//! use mastermind::solver::{Strategy, StrategyKind};
//!
//! let config = Configuration::new("ABCDEF", 4, false).unwrap();
//!
//! // Score a guess
//! let guess = config.code("AABB").unwrap();
//! let secret = config.code("ABCD").unwrap();
//! assert_eq!(config.evaluate(&guess, &secret).unwrap(), Score::new(1, 1));
//!
//! // Ask a strategy for guesses
//! let mut strategy = StrategyKind::Knuth.build(&config);
//! let first = strategy.next_guess().unwrap();
//! strategy.record_score(first, config.evaluate(&first, &secret).unwrap());
//! println!("next guess: {}", strategy.next_guess().unwrap());
//! ```

// Core domain types
pub mod core;

// Error type
pub mod error;

// Solving algorithms
pub mod solver;

// Single game loop and players
pub mod game;

// Exhaustive strategy evaluation
pub mod evaluation;

// Integer statistics
pub mod stats;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::MastermindError;
