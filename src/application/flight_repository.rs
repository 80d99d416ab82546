// Repository trait for the upstream flight tracking API
use crate::domain::flight::{FlightDetail, FlightSummary, GeoBox, TrackPoint};
use async_trait::async_trait;
use thiserror::Error;

/// Failure of a single upstream round trip.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlightApiError {
    /// Detail lookup answered 404.
    #[error("Flight with ID {id} not found")]
    NotFound { id: u64 },

    /// Any other non-success status.
    #[error("Failed to {operation}: {status}")]
    Fetch { operation: &'static str, status: u16 },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl FlightApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FlightApiError::NotFound { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            FlightApiError::NotFound { .. } => Some(404),
            FlightApiError::Fetch { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, FlightApiError>;

/// One network call per method, no retries.
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// One page of live flights
    async fn list_flights(&self, limit: usize, offset: usize) -> ApiResult<Vec<FlightSummary>>;

    /// Full record for one flight; `NotFound` on 404
    async fn get_flight_detail(&self, id: u64) -> ApiResult<FlightDetail>;

    /// Flights inside a lat/lon rectangle
    async fn list_flights_in_box(&self, geo_box: GeoBox) -> ApiResult<Vec<FlightSummary>>;

    /// Chronological position history; empty when the flight has none
    async fn get_flight_track(&self, id: u64) -> ApiResult<Vec<TrackPoint>>;
}
