mod log;
mod route;
mod trip;

pub use log::{DutyPeriod, EldLog};
pub use route::{PointType, RoutePoint};
pub use trip::{Trip, TripInput, cycle_hours_in_range};

/// Maximum driver cycle hours accepted by the service (FMCSA 11-hour rule).
pub const MAX_CYCLE_HOURS: f64 = 11.0;
