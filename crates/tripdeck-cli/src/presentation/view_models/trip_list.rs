use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Console listing of trips. `--format json` serializes this verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripListViewModel {
    pub trips: Vec<TripRowViewModel>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRowViewModel {
    pub id: Uuid,
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub current_cycle_hours: f64,
    pub created_at: DateTime<Utc>,
}
