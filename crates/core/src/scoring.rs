//! Scoring - points for cleared rows

use crate::types::DEFAULT_POINTS_PER_LINE;

/// Points for clearing `cleared_rows` rows at once.
///
/// Scoring is linear: two rows in one landing are worth exactly two single
/// clears. Saturates instead of overflowing.
pub fn line_clear_score(cleared_rows: usize, points_per_line: u32) -> u32 {
    u32::try_from(cleared_rows)
        .unwrap_or(u32::MAX)
        .saturating_mul(points_per_line)
}

/// [`line_clear_score`] with the default rate
pub fn default_line_clear_score(cleared_rows: usize) -> u32 {
    line_clear_score(cleared_rows, DEFAULT_POINTS_PER_LINE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_score_linear() {
        assert_eq!(default_line_clear_score(0), 0);
        assert_eq!(default_line_clear_score(1), 100);
        assert_eq!(default_line_clear_score(2), 200);
        assert_eq!(default_line_clear_score(4), 400);
    }

    #[test]
    fn test_custom_rate() {
        assert_eq!(line_clear_score(3, 40), 120);
    }

    #[test]
    fn test_saturates() {
        assert_eq!(line_clear_score(usize::MAX, 100), u32::MAX);
    }
}
