//! Command implementations

pub mod evaluate;
pub mod play;
pub mod solve;

pub use evaluate::{EvaluateConfig, EvaluateResult, run_evaluate};
pub use play::{ConsolePlayer, run_play};
pub use solve::{SolveConfig, SolveResult, SolveStep, solve_code};
