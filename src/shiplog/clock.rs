use chrono::{DateTime, Local};

/// Canonical timestamp format: `YYYY-MM-DD HH:MM:SS`, local wall-clock time,
/// no fractional seconds, no timezone suffix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of "now".
///
/// Injected into every operation that stamps an entry, so tests can supply a
/// fixed instant and assert exact timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Production clock backed by the local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Format an instant as the canonical timestamp string. Always succeeds.
pub fn format_timestamp(instant: DateTime<Local>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}


#[cfg(test)]
mod tests {
    use super::fixed::FixedClock;
    use super::*;

    #[test]
    fn formats_zero_padded_fields() {
        let clock = FixedClock::at(2024, 1, 2, 3, 4, 5);
        assert_eq!(format_timestamp(clock.now()), "2024-01-02 03:04:05");
    }

    #[test]
    fn system_clock_matches_format() {
        let stamp = format_timestamp(SystemClock.now());
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[10..11], " ");
        assert!(stamp
            .chars()
            .enumerate()
            .all(|(i, c)| matches!(i, 4 | 7 | 10 | 13 | 16) || c.is_ascii_digit()));
    }
}
