use std::collections::HashSet;

use chrono::{DateTime, Utc};

use tripdeck_types::{EldLog, PointType, RoutePoint, Trip};

use crate::presentation::view_models::{StopCardViewModel, TripSummaryViewModel};

/// Derive the summary aggregates from the three payloads. Returns None
/// for an empty route: there is nothing meaningful to compute and the
/// screen shows a notice instead.
pub fn present_trip_summary(
    trip: &Trip,
    route: &[RoutePoint],
    logs: &[EldLog],
) -> Option<TripSummaryViewModel> {
    if route.is_empty() {
        return None;
    }

    let start = route.iter().find(|p| p.point_type == PointType::Start);
    let dropoff = route.iter().find(|p| p.point_type == PointType::Dropoff);

    let start_time: Option<DateTime<Utc>> =
        start.map(|p| p.departure_time.unwrap_or(p.arrival_time));
    let end_time: Option<DateTime<Utc>> = dropoff.map(|p| p.arrival_time);

    let duration_minutes = match (start_time, end_time) {
        (Some(start), Some(end)) => Some((end - start).num_minutes()),
        _ => None,
    };

    // Wall-clock hours, not driving hours: rest and fuel dwell is
    // intentionally left in. The served figure has always been this
    // coarse and reports compare against it.
    let est_driving_hours = match (start_time, end_time) {
        (Some(start), Some(end)) => Some((end - start).num_hours()),
        _ => None,
    };

    let day_count = logs
        .iter()
        .map(|log| log.log_date)
        .collect::<HashSet<_>>()
        .len()
        .max(1);

    let total_distance_miles = route.iter().map(|p| p.distance.unwrap_or(0.0)).sum();

    let stops = route
        .iter()
        .map(|p| StopCardViewModel {
            point_type: p.point_type,
            location: p.location.clone(),
            arrival: p.arrival_time,
            departure: p.departure_time,
            dwell_minutes: p.duration,
        })
        .collect();

    Some(TripSummaryViewModel {
        current_location: trip.current_location.clone(),
        pickup_location: trip.pickup_location.clone(),
        dropoff_location: trip.dropoff_location.clone(),
        total_distance_miles,
        duration_minutes,
        day_count,
        rest_stop_count: route
            .iter()
            .filter(|p| p.point_type == PointType::Rest)
            .count(),
        fuel_stop_count: route
            .iter()
            .filter(|p| p.point_type == PointType::Fuel)
            .count(),
        est_driving_hours,
        stops,
    })
}
