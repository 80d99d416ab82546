// Flight domain models, as served by the upstream tracking API
use serde::{Deserialize, Serialize};

/// Emergency status reported when nothing is wrong.
pub const NO_EMERGENCY: &str = "none";

/// One live aircraft from a list or geo-box response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSummary {
    pub id: u64,
    #[serde(default)]
    pub hex_icao: Option<String>,
    #[serde(default)]
    pub registration: Option<String>,
    #[serde(default)]
    pub aircraft_type: Option<String>,
    /// Callsign.
    #[serde(default)]
    pub flight: Option<String>,
    #[serde(default)]
    pub squawk: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub altitude: Option<f64>,
    #[serde(default)]
    pub ground_speed: Option<f64>,
    /// Heading in degrees, clockwise from north.
    #[serde(default)]
    pub track: Option<f64>,
    /// ISO-8601 timestamp.
    #[serde(default)]
    pub last_seen: Option<String>,
}

impl FlightSummary {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            hex_icao: None,
            registration: None,
            aircraft_type: None,
            flight: None,
            squawk: None,
            latitude: None,
            longitude: None,
            altitude: None,
            ground_speed: None,
            track: None,
            last_seen: None,
        }
    }

    /// Current fix as (lat, lon). Zero counts as "no fix" upstream.
    pub fn position(&self) -> Option<(f64, f64)> {
        fix(self.latitude, self.longitude)
    }
}

/// Full record for a single flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightDetail {
    pub id: u64,
    #[serde(default)]
    pub hex_icao: Option<String>,
    #[serde(default)]
    pub registration: Option<String>,
    #[serde(default)]
    pub aircraft_type: Option<String>,
    #[serde(default)]
    pub flight: Option<String>,
    #[serde(default)]
    pub squawk: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub altitude_baro: Option<f64>,
    #[serde(default)]
    pub altitude_geom: Option<f64>,
    #[serde(default)]
    pub ground_speed: Option<f64>,
    #[serde(default)]
    pub track: Option<f64>,
    #[serde(default)]
    pub vertical_rate: Option<f64>,
    /// ADS-B emitter category, e.g. "A5".
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub emergency_status: Option<String>,
    #[serde(default)]
    pub db_flags: Option<i64>,
    #[serde(default)]
    pub on_ground: bool,
    #[serde(default)]
    pub last_seen: Option<String>,
    #[serde(default)]
    pub first_seen: Option<String>,
    #[serde(default)]
    pub total_positions: Option<u64>,
}

impl FlightDetail {
    /// Any status other than the "none" sentinel is an active emergency.
    pub fn has_emergency(&self) -> bool {
        match self.emergency_status.as_deref() {
            Some(status) => !status.is_empty() && status != NO_EMERGENCY,
            None => false,
        }
    }

    pub fn position(&self) -> Option<(f64, f64)> {
        fix(self.latitude, self.longitude)
    }
}

/// One historical position sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackPoint {
    pub id: u64,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub alt_baro: Option<f64>,
    #[serde(default)]
    pub ground_speed: Option<f64>,
    #[serde(default)]
    pub track: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl TrackPoint {
    pub fn new(id: u64, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            latitude,
            longitude,
            alt_baro: None,
            ground_speed: None,
            track: None,
            timestamp: None,
        }
    }
}

/// Axis-aligned lat/lon rectangle. Bounds are sent as given; no wrap handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl GeoBox {
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }
}

impl Default for GeoBox {
    // Continental US
    fn default() -> Self {
        Self::new(50.0, 25.0, -65.0, -125.0)
    }
}

fn fix(latitude: Option<f64>, longitude: Option<f64>) -> Option<(f64, f64)> {
    match (latitude, longitude) {
        (Some(lat), Some(lon)) if lat != 0.0 && lon != 0.0 => Some((lat, lon)),
        _ => None,
    }
}
