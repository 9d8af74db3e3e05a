use chrono::{DateTime, Utc};

/// Format a minute count as "2h 30m". Zero is an honest "0h 0m", not a
/// blank.
pub fn format_hours_minutes(minutes: i64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// "Mar 4, 2:30 PM", used for stop arrival/departure stamps.
pub fn format_stop_time(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %-I:%M %p").to_string()
}

/// "Mar 4, 2026, 2:30 PM", the long form used by the stop detail panel.
pub fn format_full_time(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y, %-I:%M %p").to_string()
}

/// "Mar 4, 2026", used for creation dates in the trip list.
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_hours_minutes() {
        assert_eq!(format_hours_minutes(150), "2h 30m");
        assert_eq!(format_hours_minutes(0), "0h 0m");
        assert_eq!(format_hours_minutes(60), "1h 0m");
        assert_eq!(format_hours_minutes(59), "0h 59m");
    }

    #[test]
    fn test_format_stop_time() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 4, 14, 30, 0).unwrap();
        assert_eq!(format_stop_time(&ts), "Mar 4, 2:30 PM");
    }

    #[test]
    fn test_format_date() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 4, 14, 30, 0).unwrap();
        assert_eq!(format_date(&ts), "Mar 4, 2026");
    }

    #[test]
    fn test_format_full_time_morning() {
        let ts = Utc.with_ymd_and_hms(2026, 11, 20, 8, 5, 0).unwrap();
        assert_eq!(format_full_time(&ts), "Nov 20, 2026, 8:05 AM");
    }
}
