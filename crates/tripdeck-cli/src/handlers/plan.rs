use anyhow::Result;
use tokio::runtime::Runtime;
use tripdeck_client::TripClient;

use crate::app::{self, Route};

pub fn handle(client: TripClient, rt: &Runtime) -> Result<()> {
    app::run(client, rt.handle().clone(), Route::Plan)
}
