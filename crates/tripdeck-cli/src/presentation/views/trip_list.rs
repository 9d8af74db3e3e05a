use std::fmt;

use crate::presentation::formatters::time;
use crate::presentation::view_models::TripListViewModel;

// Display constants
const ID_SHORT_LENGTH: usize = 8;
const LOCATION_COLUMN_WIDTH: usize = 22;

/// Plain-text trip table for the console path. Empty input renders the
/// call-to-action, never a headerless table.
pub struct TripListView<'a> {
    data: &'a TripListViewModel,
}

impl<'a> TripListView<'a> {
    pub fn new(data: &'a TripListViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for TripListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.trips.is_empty() {
            writeln!(
                f,
                "You haven't created any trips yet. Start by planning a new trip:"
            )?;
            writeln!(f, "  tripdeck plan")?;
            return Ok(());
        }

        writeln!(
            f,
            "{:<8}  {:<width$}  {:<width$}  {:<width$}  CREATED",
            "ID",
            "FROM",
            "PICKUP",
            "DROPOFF",
            width = LOCATION_COLUMN_WIDTH
        )?;
        writeln!(f, "{}", "-".repeat(100))?;

        for trip in &self.data.trips {
            let id_short = trip
                .id
                .to_string()
                .chars()
                .take(ID_SHORT_LENGTH)
                .collect::<String>();

            writeln!(
                f,
                "{:<8}  {:<width$}  {:<width$}  {:<width$}  {}",
                id_short,
                truncate(&trip.current_location, LOCATION_COLUMN_WIDTH),
                truncate(&trip.pickup_location, LOCATION_COLUMN_WIDTH),
                truncate(&trip.dropoff_location, LOCATION_COLUMN_WIDTH),
                time::format_date(&trip.created_at),
                width = LOCATION_COLUMN_WIDTH
            )?;
        }

        writeln!(f, "\n{} trip(s)", self.data.total)?;
        Ok(())
    }
}

fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::TripRowViewModel;
    use chrono::TimeZone;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_empty_list_shows_call_to_action() {
        let vm = TripListViewModel {
            trips: Vec::new(),
            total: 0,
        };
        let rendered = TripListView::new(&vm).to_string();
        assert!(rendered.contains("You haven't created any trips yet"));
        assert!(rendered.contains("tripdeck plan"));
        assert!(!rendered.contains("ID"));
    }

    #[test]
    fn test_rows_render_with_created_date() {
        let vm = TripListViewModel {
            trips: vec![TripRowViewModel {
                id: Uuid::nil(),
                current_location: "Los Angeles, CA".into(),
                pickup_location: "Phoenix, AZ".into(),
                dropoff_location: "Dallas, TX".into(),
                current_cycle_hours: 2.0,
                created_at: Utc.with_ymd_and_hms(2026, 3, 4, 18, 30, 0).unwrap(),
            }],
            total: 1,
        };

        let rendered = TripListView::new(&vm).to_string();
        assert!(rendered.contains("00000000"));
        assert!(rendered.contains("Phoenix, AZ"));
        assert!(rendered.contains("Mar 4, 2026"));
        assert!(rendered.contains("1 trip(s)"));
    }
}
