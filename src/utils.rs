/// Session elapsed time as hh:mm:ss.
pub fn format_elapsed(ms: i64) -> String {
    let total = (ms / 1000).max(0);
    format!("{:02}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

/// Rest countdown as mm:ss.
pub fn format_countdown(ms: i64) -> String {
    let total = (ms / 1000).max(0);
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_rolls_over_hours() {
        assert_eq!(format_elapsed(0), "00:00:00");
        assert_eq!(format_elapsed(61_000), "00:01:01");
        assert_eq!(format_elapsed(3_661_000), "01:01:01");
        assert_eq!(format_elapsed(-5), "00:00:00");
    }

    #[test]
    fn countdown_clamps_at_zero() {
        assert_eq!(format_countdown(90_000), "01:30");
        assert_eq!(format_countdown(999), "00:00");
        assert_eq!(format_countdown(-1000), "00:00");
    }
}
