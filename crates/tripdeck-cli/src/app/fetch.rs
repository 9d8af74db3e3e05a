use std::sync::mpsc::Sender;

use tokio::runtime::Handle;
use uuid::Uuid;

use tripdeck_client::TripClient;
use tripdeck_types::{EldLog, RoutePoint, Trip, TripInput};

/// Result of a background request, delivered to the UI loop over the
/// fetch channel and routed to whichever screen is mounted.
///
/// Detail messages carry the trip id they were issued for so a screen
/// can drop results that belong to an earlier mount.
#[derive(Debug)]
pub enum FetchMessage {
    TripCreated(Result<Trip, String>),
    TripsLoaded(Result<Vec<Trip>, String>),
    TripLoaded {
        id: Uuid,
        result: Result<Trip, String>,
    },
    RouteLoaded {
        id: Uuid,
        result: Result<Vec<RoutePoint>, String>,
    },
    LogsLoaded {
        id: Uuid,
        result: Result<Vec<EldLog>, String>,
    },
}

/// Spawns requests on the tokio runtime and reports back over the
/// channel. Sends after the receiver is gone are ignored; the app is
/// shutting down at that point.
#[derive(Clone)]
pub struct Fetcher {
    rt: Handle,
    client: TripClient,
    tx: Sender<FetchMessage>,
}

impl Fetcher {
    pub fn new(rt: Handle, client: TripClient, tx: Sender<FetchMessage>) -> Self {
        Self { rt, client, tx }
    }

    pub fn create_trip(&self, input: TripInput) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.rt.spawn(async move {
            let result = client.create_trip(&input).await.map_err(|e| e.to_string());
            let _ = tx.send(FetchMessage::TripCreated(result));
        });
    }

    pub fn list_trips(&self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.rt.spawn(async move {
            let result = client.list_trips().await.map_err(|e| e.to_string());
            let _ = tx.send(FetchMessage::TripsLoaded(result));
        });
    }

    /// Issue the three detail requests as independent tasks. They may
    /// resolve in any order; the details screen joins on all three.
    pub fn trip_details(&self, id: Uuid) {
        {
            let client = self.client.clone();
            let tx = self.tx.clone();
            self.rt.spawn(async move {
                let result = client.get_trip(id).await.map_err(|e| e.to_string());
                let _ = tx.send(FetchMessage::TripLoaded { id, result });
            });
        }
        {
            let client = self.client.clone();
            let tx = self.tx.clone();
            self.rt.spawn(async move {
                let result = client.get_route(id).await.map_err(|e| e.to_string());
                let _ = tx.send(FetchMessage::RouteLoaded { id, result });
            });
        }
        {
            let client = self.client.clone();
            let tx = self.tx.clone();
            self.rt.spawn(async move {
                let result = client.get_logs(id).await.map_err(|e| e.to_string());
                let _ = tx.send(FetchMessage::LogsLoaded { id, result });
            });
        }
    }
}
