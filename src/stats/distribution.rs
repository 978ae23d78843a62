//! Ordered multiset of integers with descriptive statistics

use std::collections::BTreeMap;

/// Counts of non-negative integer values
///
/// Every statistic returns `None` while the distribution is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution {
    counts: BTreeMap<usize, usize>,
    size: usize,
}

impl Distribution {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `value`
    pub fn add(&mut self, value: usize) {
        *self.counts.entry(value).or_insert(0) += 1;
        self.size += 1;
    }

    /// Number of recorded values, counting repeats
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// How many times `value` was recorded
    #[must_use]
    pub fn count(&self, value: usize) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Distinct values with their counts, ascending
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(&value, &count)| (value, count))
    }

    #[must_use]
    pub fn min(&self) -> Option<usize> {
        self.counts.keys().next().copied()
    }

    #[must_use]
    pub fn max(&self) -> Option<usize> {
        self.counts.keys().next_back().copied()
    }

    #[must_use]
    pub fn sum(&self) -> usize {
        self.iter().map(|(value, count)| value * count).sum()
    }

    /// Arithmetic mean
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.sum() as f64 / self.size as f64)
    }

    /// Population standard deviation
    #[must_use]
    pub fn std_dev(&self) -> Option<f64> {
        let mean = self.mean()?;
        let variance = self
            .iter()
            .map(|(value, count)| (value as f64 - mean).powi(2) * count as f64)
            .sum::<f64>()
            / self.size as f64;
        Some(variance.sqrt())
    }

    /// Smallest value whose cumulative share strictly exceeds `percentile`
    ///
    /// `percentile` is expressed in `0.0..=100.0`. When no value exceeds it
    /// (for example at 100) the maximum is returned.
    ///
    /// # Examples
    /// ```
    /// use mastermind::stats::Distribution;
    ///
    /// let mut dist = Distribution::new();
    /// for value in [2, 4, 4, 4, 5, 5, 7, 9] {
    ///     dist.add(value);
    /// }
    /// assert_eq!(dist.percentile(0.0), Some(2));
    /// assert_eq!(dist.percentile(50.0), Some(5));
    /// assert_eq!(dist.percentile(100.0), Some(9));
    /// ```
    #[must_use]
    pub fn percentile(&self, percentile: f64) -> Option<usize> {
        let total = self.size as f64;
        let mut cumulative = 0;
        for (value, count) in self.iter() {
            cumulative += count;
            if cumulative as f64 / total * 100.0 > percentile {
                return Some(value);
            }
        }
        self.max()
    }
}

impl FromIterator<usize> for Distribution {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut dist = Self::new();
        dist.extend(iter);
        dist
    }
}

impl Extend<usize> for Distribution {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Distribution {
        [2, 4, 4, 4, 5, 5, 7, 9].into_iter().collect()
    }

    #[test]
    fn empty_distribution_has_no_statistics() {
        let dist = Distribution::new();
        assert!(dist.is_empty());
        assert_eq!(dist.min(), None);
        assert_eq!(dist.max(), None);
        assert_eq!(dist.mean(), None);
        assert_eq!(dist.std_dev(), None);
        assert_eq!(dist.percentile(50.0), None);
    }

    #[test]
    fn counts() {
        let dist = sample();
        assert_eq!(dist.len(), 8);
        assert_eq!(dist.count(4), 3);
        assert_eq!(dist.count(3), 0);
        assert_eq!(dist.sum(), 40);
        assert_eq!(dist.min(), Some(2));
        assert_eq!(dist.max(), Some(9));
    }

    #[test]
    fn mean_and_std_dev() {
        let dist = sample();
        assert!((dist.mean().unwrap() - 5.0).abs() < 1e-9);
        assert!((dist.std_dev().unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn percentiles() {
        let dist = sample();
        let expected = [2, 2, 4, 4, 4, 5, 5, 5, 7, 9, 9];
        for (step, want) in expected.into_iter().enumerate() {
            let p = step as f64 * 10.0;
            assert_eq!(dist.percentile(p), Some(want), "percentile {p}");
        }
    }

    #[test]
    fn percentiles_are_monotonic() {
        let dist = sample();
        let low = dist.percentile(0.0).unwrap();
        let mid = dist.percentile(50.0).unwrap();
        let high = dist.percentile(100.0).unwrap();
        assert!(low <= mid && mid <= high);
        assert_eq!(Some(high), dist.max());
    }

    #[test]
    fn single_value() {
        let mut dist = Distribution::new();
        dist.add(3);
        assert_eq!(dist.percentile(0.0), Some(3));
        assert_eq!(dist.percentile(100.0), Some(3));
        assert_eq!(dist.std_dev(), Some(0.0));
    }
}
