use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A duty-status interval within a single calendar day, as a
/// `["HH:MM", "HH:MM"]` pair on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyPeriod(pub String, pub String);

impl DutyPeriod {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self(start.into(), end.into())
    }

    pub fn start(&self) -> &str {
        &self.0
    }

    pub fn end(&self) -> &str {
        &self.1
    }
}

/// One day's Electronic Logging Device record for a trip.
///
/// The four period lists jointly cover the day; the server guarantees
/// they do not overlap. The client renders them as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EldLog {
    pub log_date: NaiveDate,
    pub starting_location: String,
    pub ending_location: String,
    #[serde(default)]
    pub driving_periods: Vec<DutyPeriod>,
    #[serde(default)]
    pub on_duty_periods: Vec<DutyPeriod>,
    #[serde(default)]
    pub off_duty_periods: Vec<DutyPeriod>,
    #[serde(default)]
    pub sleeper_berth_periods: Vec<DutyPeriod>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_are_wire_pairs() {
        let json = r#"{
            "log_date": "2026-03-05",
            "starting_location": "Phoenix, AZ",
            "ending_location": "Tucumcari, NM",
            "driving_periods": [["08:00", "12:00"], ["13:00", "17:30"]],
            "on_duty_periods": [["07:00", "08:00"]],
            "off_duty_periods": [],
            "sleeper_berth_periods": [["22:00", "23:59"]]
        }"#;

        let log: EldLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.log_date, NaiveDate::from_ymd_opt(2026, 3, 5).unwrap());
        assert_eq!(log.driving_periods.len(), 2);
        assert_eq!(log.driving_periods[0].start(), "08:00");
        assert_eq!(log.driving_periods[1].end(), "17:30");
        assert!(log.off_duty_periods.is_empty());

        let back = serde_json::to_string(&log.on_duty_periods).unwrap();
        assert_eq!(back, r#"[["07:00","08:00"]]"#);
    }
}
