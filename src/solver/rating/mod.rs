//! Guess rating functions
//!
//! A rating measures how well a guess splits the remaining candidates; higher
//! is better. Every rater works from the partition sizes produced by
//! [`partition_sizes`](crate::solver::elimination::partition_sizes).

mod expected_size;
mod minimax;
mod percentile;

pub use expected_size::expected_size_rating;
pub use minimax::worst_case_rating;
pub use percentile::percentile_rating;

/// Rating hook of an eliminating strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rater {
    /// Constant rating, so the first remaining candidate wins
    Simple,
    /// Knuth's minimax: candidates minus the largest partition
    WorstCase,
    /// Candidates minus the expected partition size
    ExpectedSize,
    /// Percentile of candidates minus partition size, over every score
    Percentile(f64),
}

impl Rater {
    /// Whether ratings depend on the partition sizes at all
    #[must_use]
    pub const fn needs_partitions(self) -> bool {
        !matches!(self, Self::Simple)
    }

    /// Rate a guess from its partition sizes
    ///
    /// `sizes` must cover every achievable score, empty partitions included.
    #[must_use]
    pub fn rate(self, sizes: &[usize]) -> f64 {
        let total: usize = sizes.iter().sum();
        match self {
            Self::Simple => 0.0,
            Self::WorstCase => worst_case_rating(sizes, total),
            Self::ExpectedSize => expected_size_rating(sizes, total),
            Self::Percentile(p) => percentile_rating(sizes, total, p),
        }
    }
}
