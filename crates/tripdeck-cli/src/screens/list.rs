use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::widgets::TableState;

use tripdeck_types::Trip;

use crate::app::{FetchMessage, Fetcher, Remote};
use crate::presentation::components;

use super::Nav;

pub const LIST_ERROR_MESSAGE: &str = "Error loading trips";
pub const EMPTY_LIST_MESSAGE: &str =
    "You haven't created any trips yet. Start by planning a new trip.";

/// Trip list. Fetches once on mount; the table selection is local UI
/// state and resets on remount.
pub struct ListScreen {
    pub(crate) trips: Remote<Vec<Trip>>,
    pub(crate) table: TableState,
}

impl ListScreen {
    pub fn new(fetcher: &Fetcher) -> Self {
        fetcher.list_trips();
        Self {
            trips: Remote::Loading,
            table: TableState::default(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Nav> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Nav::Quit),
            KeyCode::Char('n') => Some(Nav::ToForm),
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(-1);
                None
            }
            KeyCode::Enter => self.selected_trip().map(|trip| Nav::ToDetails(trip.id)),
            _ => None,
        }
    }

    pub fn on_message(&mut self, msg: FetchMessage) -> Option<Nav> {
        match msg {
            FetchMessage::TripsLoaded(Ok(trips)) => {
                if !trips.is_empty() {
                    self.table.select(Some(0));
                }
                self.trips = Remote::Ready(trips);
            }
            FetchMessage::TripsLoaded(Err(_)) => {
                self.trips = Remote::Failed(LIST_ERROR_MESSAGE.to_string());
            }
            _ => {}
        }
        None
    }

    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        match &self.trips {
            Remote::Loading => components::render_loading(f, area, "Loading trips..."),
            Remote::Failed(message) => components::render_error_banner(f, area, message),
            Remote::Ready(trips) if trips.is_empty() => {
                components::render_empty_call_to_action(
                    f,
                    area,
                    EMPTY_LIST_MESSAGE,
                    "Press n to plan a new trip",
                );
            }
            Remote::Ready(trips) => {
                // Clamp before rendering in case the selection outlived
                // the data it pointed at.
                let selected = self.table.selected().unwrap_or(0).min(trips.len() - 1);
                self.table.select(Some(selected));
                components::trip_table::render(f, area, trips, &mut self.table);
            }
        }
    }

    fn selected_trip(&self) -> Option<&Trip> {
        let trips = self.trips.ready()?;
        trips.get(self.table.selected()?)
    }

    fn move_selection(&mut self, delta: i64) {
        let Some(trips) = self.trips.ready() else {
            return;
        };
        if trips.is_empty() {
            return;
        }

        let current = self.table.selected().unwrap_or(0) as i64;
        let next = (current + delta).clamp(0, trips.len() as i64 - 1);
        self.table.select(Some(next as usize));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crossterm::event::KeyModifiers;
    use uuid::Uuid;

    fn trip(dropoff: &str) -> Trip {
        Trip {
            id: Uuid::new_v4(),
            current_location: "LA".into(),
            pickup_location: "Phoenix".into(),
            dropoff_location: dropoff.into(),
            current_cycle_hours: 1.0,
            created_at: Utc::now(),
        }
    }

    fn loaded(trips: Vec<Trip>) -> ListScreen {
        let mut screen = ListScreen {
            trips: Remote::Loading,
            table: TableState::default(),
        };
        screen.on_message(FetchMessage::TripsLoaded(Ok(trips)));
        screen
    }

    #[test]
    fn test_load_selects_first_row() {
        let screen = loaded(vec![trip("Dallas"), trip("El Paso")]);
        assert_eq!(screen.table.selected(), Some(0));
    }

    #[test]
    fn test_selection_clamps_at_both_ends() {
        let mut screen = loaded(vec![trip("Dallas"), trip("El Paso")]);

        screen.move_selection(-1);
        assert_eq!(screen.table.selected(), Some(0));

        screen.move_selection(1);
        screen.move_selection(1);
        assert_eq!(screen.table.selected(), Some(1));
    }

    #[test]
    fn test_enter_opens_selected_trip() {
        let trips = vec![trip("Dallas"), trip("El Paso")];
        let second_id = trips[1].id;
        let mut screen = loaded(trips);
        screen.move_selection(1);

        let nav = screen.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(nav, Some(Nav::ToDetails(second_id)));
    }

    #[test]
    fn test_failure_becomes_error_state() {
        let mut screen = ListScreen {
            trips: Remote::Loading,
            table: TableState::default(),
        };
        screen.on_message(FetchMessage::TripsLoaded(Err("connection refused".into())));
        assert_eq!(screen.trips, Remote::Failed(LIST_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn test_enter_on_empty_list_stays_put() {
        let mut screen = loaded(Vec::new());
        let nav = screen.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(nav, None);
    }
}
