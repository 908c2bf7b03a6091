//! Display formatting for durations and chip counts.

/// Format a non-negative whole number of seconds for the countdown
/// display: `H:MM:SS` from an hour up, `M:SS` from a minute up, bare
/// `Ns` below that.
pub fn format_duration(secs: u64) -> String {
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else if m > 0 {
        format!("{m}:{s:02}")
    } else {
        format!("{s}s")
    }
}

/// Compact rendering for large chip counts: `950`, `1.3k`, `2.5M`,
/// `1.1B`. Rounds half-up at the digit below the one shown.
pub fn format_compact(n: u64) -> String {
    if n < 1_000 {
        format!("{n}")
    } else if n < 1_000_000 {
        let x = (n + 50) / 100;
        format!("{}.{}k", x / 10, x % 10)
    } else if n < 1_000_000_000 {
        let x = (n + 50_000) / 100_000;
        format!("{}.{}M", x / 10, x % 10)
    } else {
        let x = (n + 50_000_000) / 100_000_000;
        format!("{}.{}B", x / 10, x % 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_seconds_below_a_minute() {
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(45), "45s");
        assert_eq!(format_duration(59), "59s");
    }

    #[test]
    fn minutes_and_seconds() {
        assert_eq!(format_duration(60), "1:00");
        assert_eq!(format_duration(125), "2:05");
        assert_eq!(format_duration(3599), "59:59");
    }

    #[test]
    fn hours_zero_pad_minutes_and_seconds() {
        assert_eq!(format_duration(3600), "1:00:00");
        assert_eq!(format_duration(3661), "1:01:01");
        assert_eq!(format_duration(7322), "2:02:02");
    }

    #[test]
    fn compact_passes_small_numbers_through() {
        assert_eq!(format_compact(0), "0");
        assert_eq!(format_compact(950), "950");
        assert_eq!(format_compact(999), "999");
    }

    #[test]
    fn compact_thousands() {
        assert_eq!(format_compact(1_000), "1.0k");
        assert_eq!(format_compact(1_250), "1.3k");
        assert_eq!(format_compact(10_000), "10.0k");
        assert_eq!(format_compact(999_949), "999.9k");
    }

    #[test]
    fn compact_millions_and_billions() {
        assert_eq!(format_compact(1_000_000), "1.0M");
        assert_eq!(format_compact(2_450_000), "2.5M");
        assert_eq!(format_compact(1_100_000_000), "1.1B");
    }

    #[test]
    fn compact_rounds_half_up() {
        assert_eq!(format_compact(1_149), "1.1k");
        assert_eq!(format_compact(1_150), "1.2k");
    }
}
