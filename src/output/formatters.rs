//! Formatting utilities for terminal output

use crate::core::Score;

/// Spell out a score, e.g. "1 cow, 2 bulls"
#[must_use]
pub fn score_text(score: Score) -> String {
    let plural = |n: u8| if n == 1 { "" } else { "s" };
    format!(
        "{} cow{}, {} bull{}",
        score.cows(),
        plural(score.cows()),
        score.bulls(),
        plural(score.bulls())
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Width of a histogram bar, at least one cell for any non-zero count
#[must_use]
pub fn histogram_width(count: usize, max_count: usize, width: usize) -> usize {
    if max_count == 0 {
        return 0;
    }
    (count * width / max_count).max(usize::from(count > 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_text_pluralizes() {
        assert_eq!(score_text(Score::ZERO), "0 cows, 0 bulls");
        assert_eq!(score_text(Score::new(1, 2)), "1 cow, 2 bulls");
        assert_eq!(score_text(Score::new(3, 1)), "3 cows, 1 bull");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn histogram_widths() {
        assert_eq!(histogram_width(10, 10, 40), 40);
        assert_eq!(histogram_width(1, 100, 40), 1);
        assert_eq!(histogram_width(0, 100, 40), 0);
        assert_eq!(histogram_width(0, 0, 40), 0);
    }
}
