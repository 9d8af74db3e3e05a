use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of stop along a trip's route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PointType {
    Start,
    Pickup,
    Rest,
    Fuel,
    Dropoff,
}

impl PointType {
    /// Display name used across the UI.
    pub fn label(self) -> &'static str {
        match self {
            PointType::Start => "Starting Point",
            PointType::Pickup => "Pickup Location",
            PointType::Rest => "Rest Stop",
            PointType::Fuel => "Fuel Stop",
            PointType::Dropoff => "Dropoff Location",
        }
    }

    /// Wire name (also used as the short tag on map markers).
    pub fn tag(self) -> &'static str {
        match self {
            PointType::Start => "START",
            PointType::Pickup => "PICKUP",
            PointType::Rest => "REST",
            PointType::Fuel => "FUEL",
            PointType::Dropoff => "DROPOFF",
        }
    }
}

/// One stop or waypoint on a trip's route.
///
/// The server returns points ordered by arrival time; the client keeps
/// that order and never re-sorts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub point_type: PointType,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub arrival_time: DateTime<Utc>,
    #[serde(default)]
    pub departure_time: Option<DateTime<Utc>>,
    /// Dwell time at this stop, in minutes.
    #[serde(default)]
    pub duration: Option<i64>,
    /// Miles for the leg ending at this point. Not every payload carries
    /// it; sums treat a missing value as 0.
    #[serde(default)]
    pub distance: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_type_wire_names() {
        assert_eq!(serde_json::to_string(&PointType::Start).unwrap(), "\"START\"");
        assert_eq!(
            serde_json::from_str::<PointType>("\"DROPOFF\"").unwrap(),
            PointType::Dropoff
        );
    }

    #[test]
    fn test_route_point_optional_fields_default() {
        let json = r#"{
            "point_type": "REST",
            "location": "Tucumcari, NM",
            "latitude": 35.17,
            "longitude": -103.72,
            "arrival_time": "2026-03-05T02:00:00Z"
        }"#;

        let point: RoutePoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.point_type, PointType::Rest);
        assert_eq!(point.departure_time, None);
        assert_eq!(point.duration, None);
        assert_eq!(point.distance, None);
    }
}
