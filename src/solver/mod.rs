//! Mastermind solving algorithms
//!
//! Candidate elimination, guess rating, the strategy family built on top of
//! them, and guess precomputation.

pub mod elimination;
mod engine;
mod precompute;
pub mod rating;
mod selector;
pub mod strategy;

pub use engine::{DEFAULT_TIE_EPSILON, EliminationStrategy};
pub use precompute::GuessCache;
pub use selector::select_best_guess;
pub use strategy::{AnyStrategy, DumbStrategy, Strategy, StrategyKind};
