use chrono::NaiveTime;

use tripdeck_types::{DutyPeriod, EldLog};

use crate::presentation::view_models::{
    DutyCategoryViewModel, EldLogListViewModel, LogDayViewModel, PeriodViewModel,
};

/// One entry per log day, each with the four duty-status categories in
/// log-sheet order. Interval durations are clock-time differences
/// within the day; day-spanning intervals are the server's problem.
pub fn present_eld_logs(logs: &[EldLog]) -> EldLogListViewModel {
    let days = logs
        .iter()
        .map(|log| LogDayViewModel {
            log_date: log.log_date,
            starting_location: log.starting_location.clone(),
            ending_location: log.ending_location.clone(),
            categories: vec![
                category("Driving", &log.driving_periods),
                category("On Duty", &log.on_duty_periods),
                category("Off Duty", &log.off_duty_periods),
                category("Sleeper Berth", &log.sleeper_berth_periods),
            ],
        })
        .collect();

    EldLogListViewModel { days }
}

fn category(label: &'static str, periods: &[DutyPeriod]) -> DutyCategoryViewModel {
    DutyCategoryViewModel {
        label,
        periods: periods
            .iter()
            .map(|period| PeriodViewModel {
                start: period.start().to_string(),
                end: period.end().to_string(),
                duration_minutes: clock_minutes_between(period.start(), period.end()),
            })
            .collect(),
    }
}

/// Minutes from one HH:MM clock time to another on the same day.
pub(crate) fn clock_minutes_between(start: &str, end: &str) -> Option<i64> {
    let start = NaiveTime::parse_from_str(start, "%H:%M").ok()?;
    let end = NaiveTime::parse_from_str(end, "%H:%M").ok()?;
    Some((end - start).num_minutes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn log() -> EldLog {
        EldLog {
            log_date: NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
            starting_location: "Phoenix, AZ".into(),
            ending_location: "Tucumcari, NM".into(),
            driving_periods: vec![
                DutyPeriod::new("08:00", "10:30"),
                DutyPeriod::new("11:00", "11:00"),
            ],
            on_duty_periods: vec![DutyPeriod::new("07:00", "08:00")],
            off_duty_periods: Vec::new(),
            sleeper_berth_periods: vec![DutyPeriod::new("22:00", "23:59")],
        }
    }

    #[test]
    fn test_clock_minutes_between() {
        assert_eq!(clock_minutes_between("08:00", "10:30"), Some(150));
        assert_eq!(clock_minutes_between("08:00", "08:00"), Some(0));
        assert_eq!(clock_minutes_between("not-a-time", "08:00"), None);
    }

    #[test]
    fn test_categories_keep_log_sheet_order() {
        let vm = present_eld_logs(&[log()]);
        let day = &vm.days[0];

        let labels: Vec<&str> = day.categories.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Driving", "On Duty", "Off Duty", "Sleeper Berth"]);
    }

    #[test]
    fn test_period_durations() {
        let vm = present_eld_logs(&[log()]);
        let driving = &vm.days[0].categories[0];

        assert_eq!(driving.periods[0].duration_minutes, Some(150));
        assert_eq!(driving.periods[1].duration_minutes, Some(0));
    }

    #[test]
    fn test_empty_category_stays_empty() {
        let vm = present_eld_logs(&[log()]);
        let off_duty = &vm.days[0].categories[2];
        assert_eq!(off_duty.label, "Off Duty");
        assert!(off_duty.periods.is_empty());
    }

    #[test]
    fn test_no_logs_no_days() {
        let vm = present_eld_logs(&[]);
        assert!(vm.days.is_empty());
    }
}
