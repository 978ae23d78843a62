//! Expected-size rating

/// Candidates minus the expected size of the partition the secret falls in
///
/// The secret lands in a partition of size `s` with probability `s / total`,
/// so the expected remaining count is `Σ s² / total`.
///
/// # Examples
/// ```
/// use mastermind::solver::rating::expected_size_rating;
///
/// let rating = expected_size_rating(&[2, 2], 4);
/// assert!((rating - 2.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn expected_size_rating(sizes: &[usize], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let n = total as f64;
    let expected: f64 = sizes.iter().map(|&s| (s * s) as f64 / n).sum();
    n - expected
}
