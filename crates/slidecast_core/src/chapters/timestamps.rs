//! Timestamp formatting for the human-readable chapter list.

/// Format a number of seconds as `H:MM:SS`, or `MM:SS` when under an hour.
///
/// Minutes and seconds are always zero-padded to two digits; hours are not.
pub fn format_timestamp(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Lenient variant taking a raw string value.
///
/// Non-numeric input yields an empty string rather than failing.
pub fn format_timestamp_str(raw: &str) -> String {
    raw.trim()
        .parse::<u64>()
        .map(format_timestamp)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_minutes_and_seconds() {
        assert_eq!(format_timestamp(0), "00:00");
        assert_eq!(format_timestamp(59), "00:59");
        assert_eq!(format_timestamp(60), "01:00");
        assert_eq!(format_timestamp(9 * 60 + 5), "09:05");
    }

    #[test]
    fn hours_are_not_padded() {
        assert_eq!(format_timestamp(3661), "1:01:01");
        assert_eq!(format_timestamp(10 * 3600), "10:00:00");
    }

    #[test]
    fn lenient_variant_rejects_non_numeric() {
        assert_eq!(format_timestamp_str("3661"), "1:01:01");
        assert_eq!(format_timestamp_str(" 59 "), "00:59");
        assert_eq!(format_timestamp_str("abc"), "");
        assert_eq!(format_timestamp_str(""), "");
    }
}
