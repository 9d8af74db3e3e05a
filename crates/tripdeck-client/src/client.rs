use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use tripdeck_types::{EldLog, RoutePoint, Trip, TripInput};

use crate::config::normalize_base_url;
use crate::{Error, Result};

/// Per-request timeout. The UI treats a slow service as a failed fetch
/// rather than hanging a screen forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the trip service REST API.
///
/// Every call is a fresh request: no caching, no retry, no in-flight
/// deduplication. Screens own their fetch lifecycles.
#[derive(Debug, Clone)]
pub struct TripClient {
    http: reqwest::Client,
    base_url: String,
}

impl TripClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: normalize_base_url(&base_url.into()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST /trips/. Creates a trip; the server computes the route and
    /// generates ELD logs before answering with the stored trip.
    pub async fn create_trip(&self, input: &TripInput) -> Result<Trip> {
        self.post_json("/trips/", input).await
    }

    /// GET /trips/. All trips, in the order the server returns them.
    pub async fn list_trips(&self) -> Result<Vec<Trip>> {
        self.get_json("/trips/").await
    }

    /// GET /trips/{id}/
    pub async fn get_trip(&self, id: Uuid) -> Result<Trip> {
        self.get_json(&format!("/trips/{}/", id)).await
    }

    /// GET /trips/{id}/route/. Route points ordered by arrival time.
    pub async fn get_route(&self, id: Uuid) -> Result<Vec<RoutePoint>> {
        self.get_json(&format!("/trips/{}/route/", id)).await
    }

    /// GET /trips/{id}/logs/. One ELD log per day spanned by the trip.
    pub async fn get_logs(&self, id: Uuid) -> Result<Vec<EldLog>> {
        self.get_json(&format!("/trips/{}/logs/", id)).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|err| self.log_failure(&url, Error::Http(err)))?;

        self.decode_response(&url, response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        log::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .json(body)
            .send()
            .await
            .map_err(|err| self.log_failure(&url, Error::Http(err)))?;

        self.decode_response(&url, response).await
    }

    async fn decode_response<T: DeserializeOwned>(
        &self,
        url: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.log_failure(
                url,
                Error::Status {
                    status: status.as_u16(),
                    body,
                },
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| self.log_failure(url, Error::Http(err)))?;

        serde_json::from_slice(&bytes).map_err(|err| self.log_failure(url, Error::Decode(err)))
    }

    /// The UI shows a generic banner; the log stream keeps the detail.
    fn log_failure(&self, url: &str, err: Error) -> Error {
        log::error!("request to {} failed: {}", url, err);
        err
    }
}
