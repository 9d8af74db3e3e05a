pub mod plan;
pub mod show;
pub mod trips;
