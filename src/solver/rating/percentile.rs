//! Percentile rating
//!
//! Rates by a percentile of the eliminated-count distribution over every
//! achievable score. Percentile 0 looks at the worst partition, higher values
//! tolerate a few bad outcomes in exchange for better typical ones.

use crate::stats::Distribution;

/// Percentile of `total - size` across all partitions, empty ones included
///
/// # Examples
/// ```
/// use mastermind::solver::rating::percentile_rating;
///
/// // Eliminated counts are 12, 12, 15, 10, 15
/// assert_eq!(percentile_rating(&[4, 4, 1, 6, 1], 16, 0.0), 10.0);
/// assert_eq!(percentile_rating(&[4, 4, 1, 6, 1], 16, 50.0), 12.0);
/// ```
#[must_use]
pub fn percentile_rating(sizes: &[usize], total: usize, percentile: f64) -> f64 {
    let eliminated: Distribution = sizes.iter().map(|&s| total - s).collect();
    eliminated.percentile(percentile).unwrap_or(0) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_percentile_equals_worst_case() {
        let sizes = [3, 0, 2, 5, 1];
        let total = 11;
        assert!((percentile_rating(&sizes, total, 0.0) - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn top_percentile_is_best_partition() {
        // The empty partition eliminates everything
        let sizes = [3, 0, 2, 5, 1];
        assert!((percentile_rating(&sizes, 11, 100.0) - 11.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_partitions() {
        assert!(percentile_rating(&[], 0, 50.0).abs() < f64::EPSILON);
    }
}
