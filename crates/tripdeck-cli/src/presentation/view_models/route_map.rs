use chrono::{DateTime, Utc};
use serde::Serialize;

use tripdeck_types::PointType;

/// Everything the map component needs, in input order: one polyline
/// vertex and one marker per route point, plus the viewport bounds the
/// canvas fits to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMapViewModel {
    /// (longitude, latitude) pairs, one per point, route order.
    pub positions: Vec<(f64, f64)>,
    pub markers: Vec<MarkerViewModel>,
    /// Longitude bounds, padded so edge markers stay visible.
    pub x_bounds: [f64; 2],
    /// Latitude bounds, padded likewise.
    pub y_bounds: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerViewModel {
    pub point_type: PointType,
    pub location: String,
    pub longitude: f64,
    pub latitude: f64,
    pub arrival: DateTime<Utc>,
    pub departure: Option<DateTime<Utc>>,
    pub dwell_minutes: Option<i64>,
}
