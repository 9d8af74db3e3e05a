use tripdeck_types::RoutePoint;

use crate::presentation::view_models::{MarkerViewModel, RouteMapViewModel};

/// Minimum half-extent of the viewport, in degrees. A one-point route
/// still gets a usable window around the marker.
const MIN_LON_PADDING: f64 = 0.5;
const MIN_LAT_PADDING: f64 = 0.25;

/// Build the map view: polyline vertices and markers in input order,
/// viewport fitted to the bounding box of all points. None for an empty
/// route; the screen shows a notice instead of a map.
pub fn present_route_map(route: &[RoutePoint]) -> Option<RouteMapViewModel> {
    if route.is_empty() {
        return None;
    }

    let positions: Vec<(f64, f64)> = route.iter().map(|p| (p.longitude, p.latitude)).collect();

    let markers = route
        .iter()
        .map(|p| MarkerViewModel {
            point_type: p.point_type,
            location: p.location.clone(),
            longitude: p.longitude,
            latitude: p.latitude,
            arrival: p.arrival_time,
            departure: p.departure_time,
            dwell_minutes: p.duration,
        })
        .collect();

    let mut min_lon = f64::INFINITY;
    let mut max_lon = f64::NEG_INFINITY;
    let mut min_lat = f64::INFINITY;
    let mut max_lat = f64::NEG_INFINITY;
    for (lon, lat) in &positions {
        min_lon = min_lon.min(*lon);
        max_lon = max_lon.max(*lon);
        min_lat = min_lat.min(*lat);
        max_lat = max_lat.max(*lat);
    }

    let pad_lon = ((max_lon - min_lon) * 0.1).max(MIN_LON_PADDING);
    let pad_lat = ((max_lat - min_lat) * 0.1).max(MIN_LAT_PADDING);

    Some(RouteMapViewModel {
        positions,
        markers,
        x_bounds: [min_lon - pad_lon, max_lon + pad_lon],
        y_bounds: [min_lat - pad_lat, max_lat + pad_lat],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripdeck_types::PointType;

    fn point(point_type: PointType, lat: f64, lon: f64) -> RoutePoint {
        RoutePoint {
            point_type,
            location: "somewhere".into(),
            latitude: lat,
            longitude: lon,
            arrival_time: "2026-03-04T08:00:00Z".parse().unwrap(),
            departure_time: None,
            duration: None,
            distance: None,
        }
    }

    #[test]
    fn test_empty_route_has_no_map() {
        assert!(present_route_map(&[]).is_none());
    }

    #[test]
    fn test_one_marker_and_vertex_per_point_in_order() {
        let route = vec![
            point(PointType::Start, 34.05, -118.24),
            point(PointType::Pickup, 33.45, -112.07),
            point(PointType::Fuel, 35.08, -106.65),
            point(PointType::Dropoff, 32.78, -96.80),
        ];

        let vm = present_route_map(&route).unwrap();
        assert_eq!(vm.markers.len(), route.len());
        assert_eq!(vm.positions.len(), route.len());
        assert_eq!(vm.positions[0], (-118.24, 34.05));
        assert_eq!(vm.positions[3], (-96.80, 32.78));
        assert_eq!(vm.markers[2].point_type, PointType::Fuel);
    }

    #[test]
    fn test_viewport_contains_all_points() {
        let route = vec![
            point(PointType::Start, 34.05, -118.24),
            point(PointType::Dropoff, 32.78, -96.80),
        ];

        let vm = present_route_map(&route).unwrap();
        assert!(vm.x_bounds[0] < -118.24);
        assert!(vm.x_bounds[1] > -96.80);
        assert!(vm.y_bounds[0] < 32.78);
        assert!(vm.y_bounds[1] > 34.05);
    }

    #[test]
    fn test_single_point_viewport_is_not_degenerate() {
        let route = vec![point(PointType::Start, 34.05, -118.24)];
        let vm = present_route_map(&route).unwrap();
        assert!(vm.x_bounds[1] - vm.x_bounds[0] >= 1.0);
        assert!(vm.y_bounds[1] - vm.y_bounds[0] >= 0.5);
    }
}
