//! Statistics over integer samples
//!
//! Shared by the percentile rating and the evaluation report.

mod distribution;

pub use distribution::Distribution;
