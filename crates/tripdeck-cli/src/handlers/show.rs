use anyhow::Result;
use tokio::runtime::Runtime;
use tripdeck_client::TripClient;
use uuid::Uuid;

use crate::app::{self, Route};

pub fn handle(client: TripClient, rt: &Runtime, id: Uuid) -> Result<()> {
    app::run(client, rt.handle().clone(), Route::Show(id))
}
