use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use uuid::Uuid;

use tripdeck_types::{EldLog, RoutePoint, Trip};

use crate::app::{FetchMessage, Fetcher};
use crate::presentation::{components, presenters};

use super::Nav;

pub const DETAILS_ERROR_MESSAGE: &str = "Error loading trip data";
pub const NO_ROUTE_MESSAGE: &str = "No route data available";
pub const NO_SUMMARY_MESSAGE: &str = "No trip data available";
pub const NO_LOGS_MESSAGE: &str = "No ELD logs available for this trip.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsTab {
    Summary,
    Map,
    Logs,
}

impl DetailsTab {
    pub const ALL: [DetailsTab; 3] = [DetailsTab::Summary, DetailsTab::Map, DetailsTab::Logs];

    pub fn title(self) -> &'static str {
        match self {
            DetailsTab::Summary => "Trip Summary",
            DetailsTab::Map => "Route Map",
            DetailsTab::Logs => "ELD Logs",
        }
    }

    fn next(self) -> Self {
        match self {
            DetailsTab::Summary => DetailsTab::Map,
            DetailsTab::Map => DetailsTab::Logs,
            DetailsTab::Logs => DetailsTab::Summary,
        }
    }

    fn prev(self) -> Self {
        match self {
            DetailsTab::Summary => DetailsTab::Logs,
            DetailsTab::Map => DetailsTab::Summary,
            DetailsTab::Logs => DetailsTab::Map,
        }
    }
}

/// Trip details, keyed by trip id. Mounting issues three independent
/// requests; the screen stays in its loading state until all three have
/// answered, and any single failure fails the whole screen. Switching
/// tabs is synchronous and never refetches.
pub struct DetailsScreen {
    pub(crate) id: Uuid,
    pub(crate) trip: Option<Trip>,
    pub(crate) route: Option<Vec<RoutePoint>>,
    pub(crate) logs: Option<Vec<EldLog>>,
    pub(crate) error: Option<String>,
    pub(crate) tab: DetailsTab,
    pub(crate) marker_selected: usize,
    pub(crate) scroll: u16,
}

impl DetailsScreen {
    pub fn new(fetcher: &Fetcher, id: Uuid) -> Self {
        fetcher.trip_details(id);
        Self {
            id,
            trip: None,
            route: None,
            logs: None,
            error: None,
            tab: DetailsTab::Summary,
            marker_selected: 0,
            scroll: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.error.is_none()
            && (self.trip.is_none() || self.route.is_none() || self.logs.is_none())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Nav> {
        match key.code {
            KeyCode::Char('q') => Some(Nav::Quit),
            KeyCode::Esc => Some(Nav::ToList),
            KeyCode::Char('1') => {
                self.select_tab(DetailsTab::Summary);
                None
            }
            KeyCode::Char('2') => {
                self.select_tab(DetailsTab::Map);
                None
            }
            KeyCode::Char('3') => {
                self.select_tab(DetailsTab::Logs);
                None
            }
            KeyCode::Tab => {
                self.select_tab(self.tab.next());
                None
            }
            KeyCode::BackTab => {
                self.select_tab(self.tab.prev());
                None
            }
            KeyCode::Left if self.tab == DetailsTab::Map => {
                self.marker_selected = self.marker_selected.saturating_sub(1);
                None
            }
            KeyCode::Right if self.tab == DetailsTab::Map => {
                let count = self.route.as_ref().map(Vec::len).unwrap_or(0);
                if count > 0 {
                    self.marker_selected = (self.marker_selected + 1).min(count - 1);
                }
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            _ => None,
        }
    }

    pub fn on_message(&mut self, msg: FetchMessage) -> Option<Nav> {
        // Once one request has failed the screen is terminally failed
        // for this mount; late arrivals are dropped (no partial render).
        match msg {
            FetchMessage::TripLoaded { id, result } if id == self.id => match result {
                Ok(trip) if self.error.is_none() => self.trip = Some(trip),
                Err(_) => self.fail(),
                _ => {}
            },
            FetchMessage::RouteLoaded { id, result } if id == self.id => match result {
                Ok(route) if self.error.is_none() => self.route = Some(route),
                Err(_) => self.fail(),
                _ => {}
            },
            FetchMessage::LogsLoaded { id, result } if id == self.id => match result {
                Ok(logs) if self.error.is_none() => self.logs = Some(logs),
                Err(_) => self.fail(),
                _ => {}
            },
            _ => {}
        }
        None
    }

    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();

        if let Some(message) = &self.error {
            components::render_error_banner(f, area, message);
            return;
        }
        if self.is_loading() {
            components::render_loading(f, area, "Loading trip data...");
            return;
        }

        // All three payloads are present once is_loading() is false.
        let (Some(trip), Some(route), Some(logs)) =
            (self.trip.as_ref(), self.route.as_ref(), self.logs.as_ref())
        else {
            return;
        };

        let chunks = components::details_chrome::layout(area);
        components::details_chrome::render_header(f, chunks[0], trip);
        components::details_chrome::render_tabs(f, chunks[1], self.tab);
        components::details_chrome::render_footer(f, chunks[3], self.tab);

        let body = chunks[2];
        match self.tab {
            DetailsTab::Summary => {
                match presenters::present_trip_summary(trip, route, logs) {
                    Some(view_model) => {
                        components::summary::render(f, body, &view_model, self.scroll)
                    }
                    None => components::render_notice(f, body, NO_SUMMARY_MESSAGE),
                }
            }
            DetailsTab::Map => match presenters::present_route_map(route) {
                Some(view_model) => {
                    let selected = self.marker_selected.min(view_model.markers.len() - 1);
                    components::route_map::render(f, body, &view_model, selected);
                }
                None => components::render_notice(f, body, NO_ROUTE_MESSAGE),
            },
            DetailsTab::Logs => {
                let view_model = presenters::present_eld_logs(logs);
                if view_model.days.is_empty() {
                    components::render_notice(f, body, NO_LOGS_MESSAGE);
                } else {
                    components::log_list::render(f, body, &view_model, self.scroll);
                }
            }
        }
    }

    fn select_tab(&mut self, tab: DetailsTab) {
        if self.tab != tab {
            self.tab = tab;
            self.scroll = 0;
        }
    }

    fn fail(&mut self) {
        if self.error.is_none() {
            self.error = Some(DETAILS_ERROR_MESSAGE.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crossterm::event::KeyModifiers;

    fn screen(id: Uuid) -> DetailsScreen {
        DetailsScreen {
            id,
            trip: None,
            route: None,
            logs: None,
            error: None,
            tab: DetailsTab::Summary,
            marker_selected: 0,
            scroll: 0,
        }
    }

    fn trip(id: Uuid) -> Trip {
        Trip {
            id,
            current_location: "LA".into(),
            pickup_location: "Phoenix".into(),
            dropoff_location: "Dallas".into(),
            current_cycle_hours: 2.0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_waits_for_all_three_fetches() {
        let id = Uuid::new_v4();
        let mut details = screen(id);
        assert!(details.is_loading());

        // Arrival order is not guaranteed; logs first is fine.
        details.on_message(FetchMessage::LogsLoaded {
            id,
            result: Ok(Vec::new()),
        });
        assert!(details.is_loading());

        details.on_message(FetchMessage::RouteLoaded {
            id,
            result: Ok(Vec::new()),
        });
        assert!(details.is_loading());

        details.on_message(FetchMessage::TripLoaded {
            id,
            result: Ok(trip(id)),
        });
        assert!(!details.is_loading());
    }

    #[test]
    fn test_single_failure_fails_the_screen() {
        let id = Uuid::new_v4();
        let mut details = screen(id);

        details.on_message(FetchMessage::TripLoaded {
            id,
            result: Ok(trip(id)),
        });
        details.on_message(FetchMessage::RouteLoaded {
            id,
            result: Err("HTTP 500".into()),
        });

        assert_eq!(details.error.as_deref(), Some(DETAILS_ERROR_MESSAGE));
        assert!(!details.is_loading());

        // A success arriving after the failure must not resurrect a
        // partial view.
        details.on_message(FetchMessage::LogsLoaded {
            id,
            result: Ok(Vec::new()),
        });
        assert!(details.logs.is_none());
        assert_eq!(details.error.as_deref(), Some(DETAILS_ERROR_MESSAGE));
    }

    #[test]
    fn test_messages_for_other_trips_are_dropped() {
        let id = Uuid::new_v4();
        let other = Uuid::new_v4();
        let mut details = screen(id);

        details.on_message(FetchMessage::TripLoaded {
            id: other,
            result: Ok(trip(other)),
        });
        assert!(details.trip.is_none());

        details.on_message(FetchMessage::RouteLoaded {
            id: other,
            result: Err("HTTP 404".into()),
        });
        assert!(details.error.is_none());
    }

    #[test]
    fn test_tab_switching_is_pure_ui_state() {
        let id = Uuid::new_v4();
        let mut details = screen(id);

        details.handle_key(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE));
        assert_eq!(details.tab, DetailsTab::Logs);

        details.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        assert_eq!(details.tab, DetailsTab::Summary);

        details.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE));
        assert_eq!(details.tab, DetailsTab::Logs);
    }

    #[test]
    fn test_escape_returns_to_list() {
        let id = Uuid::new_v4();
        let mut details = screen(id);
        let nav = details.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(nav, Some(Nav::ToList));
    }
}
