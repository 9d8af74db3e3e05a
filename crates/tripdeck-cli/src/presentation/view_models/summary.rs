use chrono::{DateTime, Utc};
use serde::Serialize;

use tripdeck_types::PointType;

/// Display-ready aggregates for the summary tab. Raw values only;
/// formatting happens in the component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummaryViewModel {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,

    /// Sum of per-leg mileage; legs without a figure count as 0.
    pub total_distance_miles: f64,
    /// Wall-clock trip duration, start departure to dropoff arrival.
    /// None when either endpoint is missing from the route.
    pub duration_minutes: Option<i64>,
    /// Distinct log dates, floored at one day.
    pub day_count: usize,
    pub rest_stop_count: usize,
    pub fuel_stop_count: usize,
    /// Whole-hour wall-clock estimate. Deliberately coarse: dwell at
    /// rest and fuel stops is not subtracted.
    pub est_driving_hours: Option<i64>,

    /// Per-stop cards for the detailed route section.
    pub stops: Vec<StopCardViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopCardViewModel {
    pub point_type: PointType,
    pub location: String,
    pub arrival: DateTime<Utc>,
    pub departure: Option<DateTime<Utc>>,
    pub dwell_minutes: Option<i64>,
}
