//! Terminal output formatting
//!
//! Display utilities for CLI results, plus the diagnostics logger.

pub mod display;
pub mod formatters;
pub mod log;

pub use display::{
    print_configuration, print_evaluation_result, print_play_outcome, print_solve_result,
};
pub use log::{Level, Logger};
