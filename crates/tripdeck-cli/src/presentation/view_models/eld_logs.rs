use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EldLogListViewModel {
    pub days: Vec<LogDayViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogDayViewModel {
    pub log_date: NaiveDate,
    pub starting_location: String,
    pub ending_location: String,
    /// Always the four duty-status categories, in the order the log
    /// sheet prints them: driving, on duty, off duty, sleeper berth.
    pub categories: Vec<DutyCategoryViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DutyCategoryViewModel {
    pub label: &'static str,
    pub periods: Vec<PeriodViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodViewModel {
    pub start: String,
    pub end: String,
    /// Clock-time difference within the day; None when a timestamp does
    /// not parse as HH:MM.
    pub duration_minutes: Option<i64>,
}
