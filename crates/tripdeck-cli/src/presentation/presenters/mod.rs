mod eld_logs;
mod route_map;
mod summary;
mod trip_list;

pub use eld_logs::present_eld_logs;
pub use route_map::present_route_map;
pub use summary::present_trip_summary;
pub use trip_list::present_trip_list;
