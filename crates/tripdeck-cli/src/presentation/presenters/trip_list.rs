use tripdeck_types::Trip;

use crate::presentation::view_models::{TripListViewModel, TripRowViewModel};

/// Rows in server order; the service decides how trips sort.
pub fn present_trip_list(trips: Vec<Trip>) -> TripListViewModel {
    let rows: Vec<TripRowViewModel> = trips
        .into_iter()
        .map(|trip| TripRowViewModel {
            id: trip.id,
            current_location: trip.current_location,
            pickup_location: trip.pickup_location,
            dropoff_location: trip.dropoff_location,
            current_cycle_hours: trip.current_cycle_hours,
            created_at: trip.created_at,
        })
        .collect();

    TripListViewModel {
        total: rows.len(),
        trips: rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_rows_keep_server_order() {
        let trips = vec![
            Trip {
                id: Uuid::new_v4(),
                current_location: "LA".into(),
                pickup_location: "Phoenix".into(),
                dropoff_location: "Dallas".into(),
                current_cycle_hours: 1.0,
                created_at: Utc::now(),
            },
            Trip {
                id: Uuid::new_v4(),
                current_location: "Reno".into(),
                pickup_location: "Boise".into(),
                dropoff_location: "Butte".into(),
                current_cycle_hours: 3.5,
                created_at: Utc::now(),
            },
        ];

        let vm = present_trip_list(trips);
        assert_eq!(vm.total, 2);
        assert_eq!(vm.trips[0].dropoff_location, "Dallas");
        assert_eq!(vm.trips[1].dropoff_location, "Butte");
    }
}
