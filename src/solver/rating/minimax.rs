//! Knuth's worst-case rating

/// Candidates eliminated in the worst case
///
/// # Examples
/// ```
/// use mastermind::solver::rating::worst_case_rating;
///
/// // Largest partition holds 6 of 16 candidates
/// assert_eq!(worst_case_rating(&[4, 4, 1, 6, 1], 16), 10.0);
/// ```
#[must_use]
pub fn worst_case_rating(sizes: &[usize], total: usize) -> f64 {
    let largest = sizes.iter().max().copied().unwrap_or(0);
    (total - largest) as f64
}
