use chrono::{NaiveDate, NaiveTime, Timelike};

/// Parse an "HH:MM" cutoff string. Falls back to 07:15 on bad config.
pub fn parse_cutoff(value: &str) -> NaiveTime {
    NaiveTime::parse_from_str(value, "%H:%M")
        .unwrap_or_else(|_| NaiveTime::from_hms_opt(7, 15, 0).unwrap_or_default())
}

/// Late when the wall-clock minute is strictly after the cutoff minute.
/// Seconds within the cutoff minute do not count as late.
pub fn is_late(now: NaiveTime, cutoff: NaiveTime) -> bool {
    (now.hour(), now.minute()) > (cutoff.hour(), cutoff.minute())
}

/// All calendar days from `start` to `end` inclusive. Empty when the
/// range is inverted.
pub fn date_range_inclusive(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn cutoff_parses_and_falls_back() {
        assert_eq!(parse_cutoff("07:15"), t(7, 15, 0));
        assert_eq!(parse_cutoff("08:00"), t(8, 0, 0));
        assert_eq!(parse_cutoff("garbage"), t(7, 15, 0));
    }

    #[test]
    fn late_is_strictly_after_cutoff_minute() {
        let cutoff = t(7, 15, 0);
        assert!(!is_late(t(7, 0, 0), cutoff));
        assert!(!is_late(t(7, 15, 0), cutoff));
        // seconds inside the cutoff minute still count as on time
        assert!(!is_late(t(7, 15, 59), cutoff));
        assert!(is_late(t(7, 16, 0), cutoff));
        assert!(is_late(t(8, 0, 0), cutoff));
    }

    #[test]
    fn date_range_is_inclusive() {
        let days = date_range_inclusive(d(2026, 3, 2), d(2026, 3, 4));
        assert_eq!(days, vec![d(2026, 3, 2), d(2026, 3, 3), d(2026, 3, 4)]);
    }

    #[test]
    fn single_day_range() {
        assert_eq!(
            date_range_inclusive(d(2026, 3, 2), d(2026, 3, 2)),
            vec![d(2026, 3, 2)]
        );
    }

    #[test]
    fn inverted_range_is_empty() {
        assert!(date_range_inclusive(d(2026, 3, 4), d(2026, 3, 2)).is_empty());
    }
}
