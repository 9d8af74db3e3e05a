pub mod eld_logs;
pub mod route_map;
pub mod summary;
pub mod trip_list;

pub use eld_logs::{DutyCategoryViewModel, EldLogListViewModel, LogDayViewModel, PeriodViewModel};
pub use route_map::{MarkerViewModel, RouteMapViewModel};
pub use summary::{StopCardViewModel, TripSummaryViewModel};
pub use trip_list::{TripListViewModel, TripRowViewModel};
