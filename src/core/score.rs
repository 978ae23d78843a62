//! Cows and bulls feedback
//!
//! A score counts bulls (right symbol, right position) and cows (right
//! symbol, wrong position) for one guess against one code.

use super::code::MAX_LENGTH;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Number of distinct packed score values, see [`Score::packed`]
pub(crate) const PACKED_SCORES: usize = (MAX_LENGTH + 1) * (MAX_LENGTH + 1);

/// Feedback for a guess
///
/// Both counts are bounded by `MAX_LENGTH`, so a score packs into a single
/// small integer which doubles as its hash and as a dense array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    cows: u8,
    bulls: u8,
}

impl Score {
    /// No cows, no bulls
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a score
    ///
    /// # Panics
    /// Panics in debug mode if either count exceeds `MAX_LENGTH`
    #[inline]
    #[must_use]
    pub const fn new(cows: u8, bulls: u8) -> Self {
        debug_assert!(cows as usize <= MAX_LENGTH && bulls as usize <= MAX_LENGTH);
        Self { cows, bulls }
    }

    /// Right symbol in the wrong position
    #[inline]
    #[must_use]
    pub const fn cows(self) -> u8 {
        self.cows
    }

    /// Right symbol in the right position
    #[inline]
    #[must_use]
    pub const fn bulls(self) -> u8 {
        self.bulls
    }

    /// Dense encoding `bulls * (MAX_LENGTH + 1) + cows`
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Score;
    ///
    /// assert_eq!(Score::new(3, 2).packed(), 23);
    /// assert_eq!(Score::ZERO.packed(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn packed(self) -> usize {
        self.bulls as usize * (MAX_LENGTH + 1) + self.cows as usize
    }
}

impl Hash for Score {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.packed());
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.cows, self.bulls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn score_accessors() {
        let score = Score::new(1, 2);
        assert_eq!(score.cows(), 1);
        assert_eq!(score.bulls(), 2);
        assert_eq!(Score::ZERO, Score::new(0, 0));
    }

    #[test]
    fn score_display() {
        assert_eq!(Score::new(1, 3).to_string(), "(1, 3)");
    }

    #[test]
    fn packed_values_are_distinct() {
        let mut seen = FxHashSet::default();
        for bulls in 0..=MAX_LENGTH as u8 {
            for cows in 0..=MAX_LENGTH as u8 - bulls {
                let packed = Score::new(cows, bulls).packed();
                assert!(packed < PACKED_SCORES);
                assert!(seen.insert(packed), "collision for ({cows}, {bulls})");
            }
        }
    }

    #[test]
    fn equal_scores_share_a_hash_slot() {
        let mut set = FxHashSet::default();
        set.insert(Score::new(2, 1));
        assert!(set.contains(&Score::new(2, 1)));
        assert!(!set.contains(&Score::new(1, 2)));
    }
}
