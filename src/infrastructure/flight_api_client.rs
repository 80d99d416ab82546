// HTTP client for the upstream flight tracking API
use crate::application::flight_repository::{ApiResult, FlightApiError, FlightRepository};
use crate::domain::flight::{FlightDetail, FlightSummary, GeoBox, TrackPoint};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FlightApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl FlightApiClient {
    /// `timeout` of `None` leaves request timing to the transport.
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        request
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FlightApiError::Transport(e.to_string()))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                FlightApiError::Decode(e.to_string())
            } else {
                FlightApiError::Transport(e.to_string())
            }
        })
    }
}

fn failure(operation: &'static str, status: StatusCode) -> FlightApiError {
    tracing::warn!("Upstream {} failed with status {}", operation, status);
    FlightApiError::Fetch {
        operation,
        status: status.as_u16(),
    }
}

#[async_trait]
impl FlightRepository for FlightApiClient {
    async fn list_flights(&self, limit: usize, offset: usize) -> ApiResult<Vec<FlightSummary>> {
        tracing::debug!("Listing flights with limit={}, offset={}", limit, offset);
        let request = self
            .client
            .get(self.url("/list-flights"))
            .query(&[("limit", limit), ("offset", offset)]);
        let response = self.send(request).await?;

        if !response.status().is_success() {
            return Err(failure("fetch flights", response.status()));
        }
        Self::decode(response).await
    }

    async fn get_flight_detail(&self, id: u64) -> ApiResult<FlightDetail> {
        tracing::debug!("Getting flight detail for id={}", id);
        let request = self.client.get(self.url(&format!("/list-flight/{}", id)));
        let response = self.send(request).await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(FlightApiError::NotFound { id }),
            status if !status.is_success() => Err(failure("fetch flight detail", status)),
            _ => Self::decode(response).await,
        }
    }

    async fn list_flights_in_box(&self, geo_box: GeoBox) -> ApiResult<Vec<FlightSummary>> {
        tracing::debug!(
            "Geo box query: north={}, south={}, east={}, west={}",
            geo_box.north,
            geo_box.south,
            geo_box.east,
            geo_box.west
        );
        let request = self
            .client
            .post(self.url("/geobox-list-flight"))
            .json(&geo_box);
        let response = self.send(request).await?;

        if !response.status().is_success() {
            return Err(failure("fetch flights by geo box", response.status()));
        }
        Self::decode(response).await
    }

    async fn get_flight_track(&self, id: u64) -> ApiResult<Vec<TrackPoint>> {
        tracing::debug!("Getting flight track for id={}", id);
        let request = self.client.get(self.url(&format!("/flight-track/{}", id)));
        let response = self.send(request).await?;

        // The upstream answers 404 for a flight with no recorded positions.
        match response.status() {
            StatusCode::NOT_FOUND => Ok(Vec::new()),
            status if !status.is_success() => Err(failure("fetch flight track", status)),
            _ => Self::decode(response).await,
        }
    }
}
