/// Renders a second count as a zero-padded `MM:SS` clock.
pub fn format_mmss(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Elapsed fraction of a countdown as a percentage, clamped to [0, 100].
pub fn progress_percent(total_secs: u32, remaining_secs: u32) -> f64 {
    if total_secs == 0 {
        return 100.0;
    }

    let elapsed = total_secs.saturating_sub(remaining_secs) as f64;
    (elapsed / total_secs as f64 * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mmss_zero() {
        assert_eq!(format_mmss(0), "00:00");
    }

    #[test]
    fn test_format_mmss_padding() {
        assert_eq!(format_mmss(125), "02:05");
        assert_eq!(format_mmss(9), "00:09");
        assert_eq!(format_mmss(60), "01:00");
    }

    #[test]
    fn test_format_mmss_five_minutes() {
        assert_eq!(format_mmss(300), "05:00");
    }

    #[test]
    fn test_progress_at_full_remaining() {
        assert_eq!(progress_percent(300, 300), 0.0);
    }

    #[test]
    fn test_progress_at_zero_remaining() {
        assert_eq!(progress_percent(300, 0), 100.0);
    }

    #[test]
    fn test_progress_midpoint() {
        assert_eq!(progress_percent(200, 50), 75.0);
    }

    #[test]
    fn test_progress_clamps_when_remaining_exceeds_total() {
        // Defensive: a remaining count larger than the total reads as 0%.
        assert_eq!(progress_percent(100, 150), 0.0);
    }

    #[test]
    fn test_progress_zero_total() {
        assert_eq!(progress_percent(0, 0), 100.0);
    }
}
