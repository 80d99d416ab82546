// Map view: flight selection, aircraft icons, track overlay and camera
use serde::Serialize;

use super::display::{format_degrees, format_feet, format_knots, format_timestamp, text_or_placeholder};
use super::flight::{FlightSummary, TrackPoint};

const AIRCRAFT_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 32 32" width="28" height="28"><path d="M16 1 L17.5 10 L26 14 L26 15.5 L17.5 14 L17.5 22 L21 25 L21 26.5 L16 24 L11 26.5 L11 25 L14.5 22 L14.5 14 L6 15.5 L6 14 L14.5 10 Z" fill="{fill}" stroke="{stroke}" stroke-width="0.6" stroke-linejoin="round"/></svg>"#;

const ICON_SIZE: u32 = 28;
const SELECTED_FILL: &str = "#e94560";
const SELECTED_STROKE: &str = "#a0001a";
const IDLE_FILL: &str = "#c0c0e0";
const IDLE_STROKE: &str = "#444466";
const TRACK_COLOR: &str = "#e94560";
const TRACK_WEIGHT: f64 = 3.0;
const TRACK_OPACITY: f64 = 0.8;
const TRACK_POINT_RADIUS: f64 = 4.0;

/// Selection of at most one flight and its history overlay.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    #[default]
    Idle,
    /// Track fetch in flight.
    Selecting { flight_id: u64 },
    /// Track loaded, or the fetch failed and the overlay is empty.
    Selected { flight_id: u64, track: Vec<TrackPoint> },
}

/// What the caller has to do after a selection transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    FetchTrack(u64),
    Cleared,
    Unchanged,
}

impl Selection {
    pub fn flight_id(&self) -> Option<u64> {
        match self {
            Selection::Idle => None,
            Selection::Selecting { flight_id } | Selection::Selected { flight_id, .. } => {
                Some(*flight_id)
            }
        }
    }

    pub fn track(&self) -> &[TrackPoint] {
        match self {
            Selection::Selected { track, .. } => track,
            _ => &[],
        }
    }

    /// Marker click. Clicking the selected flight deselects it.
    pub fn click(&mut self, flight_id: u64) -> SelectionChange {
        if self.flight_id() == Some(flight_id) {
            *self = Selection::Idle;
            SelectionChange::Cleared
        } else {
            *self = Selection::Selecting { flight_id };
            SelectionChange::FetchTrack(flight_id)
        }
    }

    /// Programmatic selection. Never toggles an existing selection off.
    pub fn select(&mut self, flight_id: u64) -> SelectionChange {
        if self.flight_id() == Some(flight_id) {
            SelectionChange::Unchanged
        } else {
            self.click(flight_id)
        }
    }

    pub fn clear(&mut self) -> SelectionChange {
        if *self == Selection::Idle {
            SelectionChange::Unchanged
        } else {
            *self = Selection::Idle;
            SelectionChange::Cleared
        }
    }

    /// Applies a track response; ignored unless that flight is still loading.
    pub fn track_loaded(&mut self, flight_id: u64, track: Vec<TrackPoint>) -> bool {
        match self {
            Selection::Selecting { flight_id: current } if *current == flight_id => {
                *self = Selection::Selected { flight_id, track };
                true
            }
            _ => false,
        }
    }

    pub fn track_failed(&mut self, flight_id: u64) -> bool {
        self.track_loaded(flight_id, Vec::new())
    }
}

/// Render descriptor for one aircraft marker icon.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftIcon {
    pub html: String,
    pub class_name: &'static str,
    pub rotation: f64,
    pub fill: &'static str,
    pub stroke: &'static str,
    pub icon_size: [u32; 2],
    pub icon_anchor: [u32; 2],
    pub popup_anchor: [i32; 2],
}

/// Builds the icon for a flight heading (0 = north, clockwise). A missing
/// heading points north.
pub fn aircraft_icon(heading: Option<f64>, selected: bool) -> AircraftIcon {
    let (fill, stroke) = if selected {
        (SELECTED_FILL, SELECTED_STROKE)
    } else {
        (IDLE_FILL, IDLE_STROKE)
    };
    let rotation = heading.unwrap_or(0.0).rem_euclid(360.0);
    let svg = AIRCRAFT_SVG
        .replace("{fill}", fill)
        .replace("{stroke}", stroke);

    AircraftIcon {
        html: format!(
            r#"<div style="transform: rotate({}deg); width: {}px; height: {}px;">{}</div>"#,
            rotation, ICON_SIZE, ICON_SIZE, svg
        ),
        class_name: "aircraft-icon",
        rotation,
        fill,
        stroke,
        icon_size: [ICON_SIZE, ICON_SIZE],
        icon_anchor: [ICON_SIZE / 2, ICON_SIZE / 2],
        popup_anchor: [0, -(ICON_SIZE as i32 / 2)],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLngBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl LatLngBounds {
    pub fn from_points(points: &[TrackPoint]) -> Option<Self> {
        let first = points.first()?;
        let seed = Self {
            south: first.latitude,
            west: first.longitude,
            north: first.latitude,
            east: first.longitude,
        };

        Some(points.iter().skip(1).fold(seed, |bounds, p| Self {
            south: bounds.south.min(p.latitude),
            west: bounds.west.min(p.longitude),
            north: bounds.north.max(p.latitude),
            east: bounds.east.max(p.longitude),
        }))
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub center: (f64, f64),
    pub zoom: f64,
}

/// One-shot instruction for the map widget, issued when data changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CameraCommand {
    /// Pan to a point keeping the current zoom.
    Center { lat: f64, lon: f64 },
    FitBounds { bounds: LatLngBounds, padding: u32 },
}

/// Tracks the last known viewport and the command the widget has not yet
/// applied. A user pan/zoom drops any unapplied command.
#[derive(Debug, Clone)]
pub struct Camera {
    viewport: Viewport,
    pending: Option<CameraCommand>,
    fit_padding: u32,
}

impl Camera {
    pub fn new(viewport: Viewport, fit_padding: u32) -> Self {
        Self {
            viewport,
            pending: None,
            fit_padding,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pending(&self) -> Option<CameraCommand> {
        self.pending
    }

    /// Follows the first flight in a new list, if it has a fix.
    pub fn flights_changed(&mut self, flights: &[FlightSummary]) {
        if let Some((lat, lon)) = flights.first().and_then(FlightSummary::position) {
            self.pending = Some(CameraCommand::Center { lat, lon });
        }
    }

    pub fn track_changed(&mut self, track: &[TrackPoint]) {
        if track.len() < 2 {
            return;
        }
        if let Some(bounds) = LatLngBounds::from_points(track) {
            self.pending = Some(CameraCommand::FitBounds {
                bounds,
                padding: self.fit_padding,
            });
        }
    }

    pub fn user_moved(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.pending = None;
    }

    /// Hands out the pending command once.
    pub fn take(&mut self) -> Option<CameraCommand> {
        let command = self.pending.take()?;
        self.viewport.center = match command {
            CameraCommand::Center { lat, lon } => (lat, lon),
            CameraCommand::FitBounds { bounds, .. } => bounds.center(),
        };
        Some(command)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftMarker {
    pub flight_id: u64,
    pub lat: f64,
    pub lon: f64,
    pub selected: bool,
    pub icon: AircraftIcon,
    pub popup: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Polyline {
    pub points: Vec<[f64; 2]>,
    pub color: &'static str,
    pub weight: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackMarker {
    pub id: u64,
    pub lat: f64,
    pub lon: f64,
    pub radius: f64,
    pub color: &'static str,
    pub tooltip: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackOverlay {
    pub line: Option<Polyline>,
    pub points: Vec<TrackMarker>,
}

pub fn aircraft_markers(flights: &[FlightSummary], selected: Option<u64>) -> Vec<AircraftMarker> {
    flights
        .iter()
        .filter_map(|flight| {
            let (lat, lon) = flight.position()?;
            let is_selected = selected == Some(flight.id);
            Some(AircraftMarker {
                flight_id: flight.id,
                lat,
                lon,
                selected: is_selected,
                icon: aircraft_icon(flight.track, is_selected),
                popup: popup_lines(flight),
            })
        })
        .collect()
}

fn popup_lines(flight: &FlightSummary) -> Vec<String> {
    let callsign = match flight.flight.as_deref() {
        Some(callsign) if !callsign.is_empty() => callsign.to_string(),
        _ => "Unknown".to_string(),
    };
    vec![
        callsign,
        format!("Hex ICAO: {}", text_or_placeholder(flight.hex_icao.as_deref())),
        format!("Type: {}", text_or_placeholder(flight.aircraft_type.as_deref())),
        format!("Altitude: {}", format_feet(flight.altitude)),
        format!("Speed: {}", format_knots(flight.ground_speed)),
        format!("Track: {}", format_degrees(flight.track)),
    ]
}

pub fn track_overlay(track: &[TrackPoint]) -> Option<TrackOverlay> {
    if track.is_empty() {
        return None;
    }

    let line = (track.len() >= 2).then(|| Polyline {
        points: track.iter().map(|p| [p.latitude, p.longitude]).collect(),
        color: TRACK_COLOR,
        weight: TRACK_WEIGHT,
        opacity: TRACK_OPACITY,
    });

    let points = track
        .iter()
        .map(|p| TrackMarker {
            id: p.id,
            lat: p.latitude,
            lon: p.longitude,
            radius: TRACK_POINT_RADIUS,
            color: TRACK_COLOR,
            tooltip: vec![
                format!("Alt: {}", format_feet(p.alt_baro)),
                format!("Speed: {}", format_knots(p.ground_speed)),
                format_timestamp(p.timestamp.as_deref()),
            ],
        })
        .collect();

    Some(TrackOverlay { line, points })
}

/// Everything the map page shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapScene {
    pub viewport: Viewport,
    pub camera: Option<CameraCommand>,
    pub markers: Vec<AircraftMarker>,
    pub track: Option<TrackOverlay>,
    pub selected_flight_id: Option<u64>,
    pub track_loading: bool,
    pub summary: String,
    pub filtered: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub geo_box_loading: bool,
    pub geo_box_error: Option<String>,
}

/// Map page state. The displayed list is either the latest poll or the
/// latest geo-box result, never a mix.
#[derive(Debug, Clone)]
pub struct MapState {
    pub polled: Vec<FlightSummary>,
    pub poll_loading: bool,
    pub poll_error: Option<String>,
    pub filtered: Option<Vec<FlightSummary>>,
    pub geo_box_loading: bool,
    pub geo_box_error: Option<String>,
    pub selection: Selection,
    pub camera: Camera,
}

impl MapState {
    pub fn new(camera: Camera) -> Self {
        Self {
            polled: Vec::new(),
            poll_loading: true,
            poll_error: None,
            filtered: None,
            geo_box_loading: false,
            geo_box_error: None,
            selection: Selection::Idle,
            camera,
        }
    }

    pub fn displayed(&self) -> &[FlightSummary] {
        self.filtered.as_deref().unwrap_or(&self.polled)
    }

    /// New poll result. Only moves the camera while no filter is active.
    pub fn poll_succeeded(&mut self, flights: Vec<FlightSummary>) {
        self.polled = flights;
        if self.filtered.is_none() {
            self.camera.flights_changed(&self.polled);
        }
    }

    pub fn filter_applied(&mut self, flights: Vec<FlightSummary>) {
        self.camera.flights_changed(&flights);
        self.filtered = Some(flights);
    }

    pub fn filter_cleared(&mut self) {
        if self.filtered.take().is_some() {
            self.camera.flights_changed(&self.polled);
        }
        self.geo_box_loading = false;
        self.geo_box_error = None;
    }

    pub fn track_loaded(&mut self, flight_id: u64, track: Vec<TrackPoint>) -> bool {
        if !self.selection.track_loaded(flight_id, track) {
            return false;
        }
        self.camera.track_changed(self.selection.track());
        true
    }

    /// Renders the scene, handing out any pending camera command.
    pub fn render(&mut self) -> MapScene {
        let camera = self.camera.take();
        let flights = self.displayed();
        let count = flights.len();
        let filtered = self.filtered.is_some();
        let selected = self.selection.flight_id();

        let mut summary = format!(
            "Showing {} flight{}",
            count,
            if count == 1 { "" } else { "s" }
        );
        if filtered {
            summary.push_str(" (filtered)");
        }

        MapScene {
            viewport: self.camera.viewport(),
            camera,
            markers: aircraft_markers(flights, selected),
            track: track_overlay(self.selection.track()),
            selected_flight_id: selected,
            track_loading: matches!(self.selection, Selection::Selecting { .. }),
            summary,
            filtered,
            loading: self.poll_loading && !filtered,
            error: if filtered { None } else { self.poll_error.clone() },
            geo_box_loading: self.geo_box_loading,
            geo_box_error: self.geo_box_error.clone(),
        }
    }
}
