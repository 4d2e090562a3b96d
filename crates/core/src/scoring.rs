//! Scoring module - line clear points and level pacing
//!
//! Points for a clear are `LINE_SCORES[lines] * level`. A level is gained when the
//! cumulative line count reaches `level * LINES_PER_LEVEL`, and each level shortens
//! the gravity interval by a fixed step down to a floor.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_INTERVAL_STEP_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Points for clearing `lines` rows at `level`
///
/// More than four rows cannot come from a single tetromino; they score nothing.
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    LINE_SCORES
        .get(lines)
        .copied()
        .unwrap_or(0)
        .saturating_mul(level)
}

/// Whether the cumulative `lines` total earns the step after `level`
pub fn reaches_next_level(lines: u32, level: u32) -> bool {
    lines >= level.saturating_mul(LINES_PER_LEVEL)
}

/// Gravity interval for a level (in milliseconds)
///
/// `max(100, 1000 - (level - 1) * 75)`
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_INTERVAL_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_points() {
        assert_eq!(line_clear_points(0, 1), 0);
        assert_eq!(line_clear_points(1, 1), 100);
        assert_eq!(line_clear_points(2, 1), 300);
        assert_eq!(line_clear_points(3, 2), 1000);
        assert_eq!(line_clear_points(4, 3), 2400);
    }

    #[test]
    fn test_more_than_four_lines_scores_nothing() {
        assert_eq!(line_clear_points(5, 1), 0);
    }

    #[test]
    fn test_reaches_next_level() {
        assert!(!reaches_next_level(9, 1));
        assert!(reaches_next_level(10, 1));
        assert!(!reaches_next_level(19, 2));
        assert!(reaches_next_level(23, 2));
    }

    #[test]
    fn test_drop_intervals() {
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(2), 925);
        assert_eq!(drop_interval_ms(7), 550);
        assert_eq!(drop_interval_ms(13), 100);
        assert_eq!(drop_interval_ms(40), 100);
        assert_eq!(drop_interval_ms(0), 1000);
    }

    #[test]
    fn test_drop_interval_never_increases() {
        let mut prev = drop_interval_ms(1);
        for level in 2..50 {
            let cur = drop_interval_ms(level);
            assert!(cur <= prev);
            prev = cur;
        }
    }
}
