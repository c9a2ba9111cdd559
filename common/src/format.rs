//! Text formatting for time labels.
//!
//! All formatting writes into fixed-size `heapless::String`s through
//! `core::fmt::Write`; no allocation.

use core::fmt::Write;

use heapless::String;

/// Capacity of the formatted label strings.
pub const LABEL_LEN: usize = 16;

/// Split a duration in hours into whole hours and whole minutes.
///
/// Both parts are truncated, matching what the slider label shows.
#[inline]
pub fn split_hours(hours: f32) -> (u32, u32) {
    let hours = hours.max(0.0);
    let whole = hours as u32;
    let minutes = ((hours - whole as f32) * 60.0) as u32;
    (whole, minutes)
}

/// Format a duration in hours as `"Xh Ymin"`, `"Xh"` or `"Ymin"`.
///
/// Hours are shown only when non-zero, minutes only when non-zero or when
/// there are no hours (so zero formats as `"0min"`).
pub fn format_duration(hours: f32) -> String<LABEL_LEN> {
    let (h, m) = split_hours(hours);
    let mut out: String<LABEL_LEN> = String::new();
    let _ = match (h, m) {
        (0, m) => write!(out, "{m}min"),
        (h, 0) => write!(out, "{h}h"),
        (h, m) => write!(out, "{h}h {m}min"),
    };
    out
}

/// Format a second count as a zero-padded `"HH:MM:SS"` clock.
pub fn format_clock(total_seconds: u32) -> String<LABEL_LEN> {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut out: String<LABEL_LEN> = String::new();
    let _ = write!(out, "{hours:02}:{minutes:02}:{seconds:02}");
    out
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_whole_hours() {
        assert_eq!(format_duration(1.0).as_str(), "1h");
        assert_eq!(format_duration(2.0).as_str(), "2h");
    }

    #[test]
    fn test_format_duration_minutes_only() {
        assert_eq!(format_duration(0.0).as_str(), "0min");
        assert_eq!(format_duration(0.5).as_str(), "30min");
    }

    #[test]
    fn test_format_duration_mixed() {
        assert_eq!(format_duration(1.5).as_str(), "1h 30min");
        assert_eq!(format_duration(1.25).as_str(), "1h 15min");
    }

    #[test]
    fn test_format_duration_negative_clamps() {
        assert_eq!(format_duration(-1.0).as_str(), "0min");
    }

    #[test]
    fn test_split_hours_truncates() {
        // 0.02 h = 1.2 min
        assert_eq!(split_hours(0.02), (0, 1));
        assert_eq!(split_hours(1.99), (1, 59));
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0).as_str(), "00:00:00");
        assert_eq!(format_clock(3600).as_str(), "01:00:00");
        assert_eq!(format_clock(3599).as_str(), "00:59:59");
        assert_eq!(format_clock(7200 + 61).as_str(), "02:01:01");
    }
}
