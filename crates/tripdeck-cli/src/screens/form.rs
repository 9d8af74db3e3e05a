use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;

use tripdeck_types::{TripInput, cycle_hours_in_range};

use crate::app::{FetchMessage, Fetcher};
use crate::presentation::components;

use super::Nav;

/// Generic failure banner; the underlying error goes to the log stream.
pub const CREATE_ERROR_MESSAGE: &str =
    "Error creating trip. Please check your inputs and try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    CurrentLocation,
    PickupLocation,
    DropoffLocation,
    CycleHours,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::CurrentLocation,
        FormField::PickupLocation,
        FormField::DropoffLocation,
        FormField::CycleHours,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::CurrentLocation => "Current Location",
            FormField::PickupLocation => "Pickup Location",
            FormField::DropoffLocation => "Dropoff Location",
            FormField::CycleHours => "Current Hours Driven in Cycle",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::CurrentLocation => "e.g., Los Angeles, CA",
            FormField::PickupLocation => "e.g., Phoenix, AZ",
            FormField::DropoffLocation => "e.g., Dallas, TX",
            FormField::CycleHours => "0",
        }
    }

    pub fn helper(self) -> &'static str {
        match self {
            FormField::CurrentLocation => "Enter your current city and state",
            FormField::PickupLocation => "Enter the city and state for pickup",
            FormField::DropoffLocation => "Enter the city and state for dropoff",
            FormField::CycleHours => "Enter hours already driven in your current cycle (0-11)",
        }
    }

    fn next(self) -> Self {
        match self {
            FormField::CurrentLocation => FormField::PickupLocation,
            FormField::PickupLocation => FormField::DropoffLocation,
            FormField::DropoffLocation => FormField::CycleHours,
            FormField::CycleHours => FormField::CurrentLocation,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormField::CurrentLocation => FormField::CycleHours,
            FormField::PickupLocation => FormField::CurrentLocation,
            FormField::DropoffLocation => FormField::PickupLocation,
            FormField::CycleHours => FormField::DropoffLocation,
        }
    }
}

/// Trip-creation form. Field values survive a failed submission; a
/// successful one navigates to the created trip's details.
pub struct FormScreen {
    pub(crate) current_location: String,
    pub(crate) pickup_location: String,
    pub(crate) dropoff_location: String,
    pub(crate) cycle_hours: String,
    pub(crate) focus: FormField,
    pub(crate) submitting: bool,
    pub(crate) error: Option<String>,
}

impl Default for FormScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl FormScreen {
    pub fn new() -> Self {
        Self {
            current_location: String::new(),
            pickup_location: String::new(),
            dropoff_location: String::new(),
            cycle_hours: "0".to_string(),
            focus: FormField::CurrentLocation,
            submitting: false,
            error: None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, fetcher: &Fetcher) -> Option<Nav> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('t') => Some(Nav::ToList),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc => Some(Nav::Quit),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                None
            }
            KeyCode::Backspace => {
                self.active_field_mut().pop();
                None
            }
            KeyCode::Enter => {
                self.submit(fetcher);
                None
            }
            KeyCode::Char(c) => {
                self.insert_char(c);
                None
            }
            _ => None,
        }
    }

    pub fn on_message(&mut self, msg: FetchMessage) -> Option<Nav> {
        match msg {
            FetchMessage::TripCreated(Ok(trip)) => Some(Nav::ToDetails(trip.id)),
            FetchMessage::TripCreated(Err(_)) => {
                self.submitting = false;
                self.error = Some(CREATE_ERROR_MESSAGE.to_string());
                None
            }
            // Addressed to a previous mount.
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        components::form::render(f, area, self);
    }

    pub(crate) fn field_value(&self, field: FormField) -> &str {
        match field {
            FormField::CurrentLocation => &self.current_location,
            FormField::PickupLocation => &self.pickup_location,
            FormField::DropoffLocation => &self.dropoff_location,
            FormField::CycleHours => &self.cycle_hours,
        }
    }

    fn active_field_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::CurrentLocation => &mut self.current_location,
            FormField::PickupLocation => &mut self.pickup_location,
            FormField::DropoffLocation => &mut self.dropoff_location,
            FormField::CycleHours => &mut self.cycle_hours,
        }
    }

    fn insert_char(&mut self, c: char) {
        if self.focus == FormField::CycleHours {
            // An edit that would leave [0, 11] is rejected outright: the
            // field keeps its previous value rather than clamping.
            let mut candidate = self.cycle_hours.clone();
            candidate.push(c);
            if cycle_buffer_is_valid(&candidate) {
                self.cycle_hours = candidate;
            }
        } else {
            self.active_field_mut().push(c);
        }
    }

    fn submit(&mut self, fetcher: &Fetcher) {
        if self.submitting {
            return;
        }
        self.error = None;

        let numeric = self.cycle_hours.trim_end_matches('.');
        let hours: f64 = if numeric.is_empty() {
            0.0
        } else {
            match numeric.parse() {
                Ok(value) => value,
                Err(_) => {
                    self.error = Some(CREATE_ERROR_MESSAGE.to_string());
                    return;
                }
            }
        };

        match TripInput::new(
            self.current_location.clone(),
            self.pickup_location.clone(),
            self.dropoff_location.clone(),
            hours,
        ) {
            Ok(input) => {
                self.submitting = true;
                fetcher.create_trip(input);
            }
            Err(_) => {
                self.error = Some(CREATE_ERROR_MESSAGE.to_string());
            }
        }
    }
}

fn cycle_buffer_is_valid(buffer: &str) -> bool {
    if buffer.is_empty() {
        return true;
    }
    if !buffer.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return false;
    }
    if buffer.matches('.').count() > 1 {
        return false;
    }

    let numeric = buffer.trim_end_matches('.');
    if numeric.is_empty() {
        return true;
    }
    match numeric.parse::<f64>() {
        Ok(value) => cycle_hours_in_range(value),
        Err(_) => false,
    }
}
