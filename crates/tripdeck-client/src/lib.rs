mod client;
pub mod config;
mod error;

pub use client::TripClient;
pub use config::{Config, DEFAULT_API_URL, resolve_api_url};
pub use error::{Error, Result};
