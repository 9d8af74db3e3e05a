use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::MAX_CYCLE_HOURS;
use crate::error::{Error, Result};

/// A planned haul as returned by the trip service.
///
/// Trips are immutable from the client's perspective: the server assigns
/// the id and timestamp on creation and owns the associated route and
/// logs. Payloads may nest `route_points`/`eld_logs`; those are fetched
/// through their own endpoints and ignored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Server-assigned identifier.
    pub id: Uuid,
    /// Where the driver currently is.
    pub current_location: String,
    /// Where the load is picked up.
    pub pickup_location: String,
    /// Where the load is dropped off.
    pub dropoff_location: String,
    /// Hours already driven in the current duty cycle (0-11).
    pub current_cycle_hours: f64,
    /// When the trip was created, server time.
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripInput {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub current_cycle_hours: f64,
}

impl TripInput {
    /// Build a validated input. The server enforces the same rules; this
    /// keeps obviously bad requests off the wire.
    pub fn new(
        current_location: impl Into<String>,
        pickup_location: impl Into<String>,
        dropoff_location: impl Into<String>,
        current_cycle_hours: f64,
    ) -> Result<Self> {
        let input = Self {
            current_location: current_location.into(),
            pickup_location: pickup_location.into(),
            dropoff_location: dropoff_location.into(),
            current_cycle_hours,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> Result<()> {
        if self.current_location.trim().is_empty() {
            return Err(Error::MissingField("current_location"));
        }
        if self.pickup_location.trim().is_empty() {
            return Err(Error::MissingField("pickup_location"));
        }
        if self.dropoff_location.trim().is_empty() {
            return Err(Error::MissingField("dropoff_location"));
        }
        if !cycle_hours_in_range(self.current_cycle_hours) {
            return Err(Error::CycleHoursOutOfRange(self.current_cycle_hours));
        }
        Ok(())
    }
}

/// Whether a cycle-hours value is inside the accepted [0, 11] range.
pub fn cycle_hours_in_range(hours: f64) -> bool {
    (0.0..=MAX_CYCLE_HOURS).contains(&hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_deserializes_server_payload() {
        // Shape as emitted by the service, including nested collections
        // the client does not model.
        let json = r#"{
            "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "current_location": "Los Angeles, CA",
            "pickup_location": "Phoenix, AZ",
            "dropoff_location": "Dallas, TX",
            "current_cycle_hours": 2.5,
            "created_at": "2026-03-04T18:30:00Z",
            "route_points": [],
            "eld_logs": []
        }"#;

        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.current_location, "Los Angeles, CA");
        assert_eq!(trip.current_cycle_hours, 2.5);
        assert_eq!(trip.created_at.to_rfc3339(), "2026-03-04T18:30:00+00:00");
    }

    #[test]
    fn test_input_rejects_out_of_range_hours() {
        let err = TripInput::new("LA", "Phoenix", "Dallas", 12.0).unwrap_err();
        assert_eq!(err, Error::CycleHoursOutOfRange(12.0));

        let err = TripInput::new("LA", "Phoenix", "Dallas", -1.0).unwrap_err();
        assert_eq!(err, Error::CycleHoursOutOfRange(-1.0));
    }

    #[test]
    fn test_input_accepts_boundaries() {
        assert!(TripInput::new("LA", "Phoenix", "Dallas", 0.0).is_ok());
        assert!(TripInput::new("LA", "Phoenix", "Dallas", 11.0).is_ok());
    }

    #[test]
    fn test_input_rejects_blank_locations() {
        let err = TripInput::new("  ", "Phoenix", "Dallas", 4.0).unwrap_err();
        assert_eq!(err, Error::MissingField("current_location"));
    }
}
