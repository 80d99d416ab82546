// HTTP request handlers
use crate::application::detail_service::DetailOutcome;
use crate::application::table_service::FlightsPageView;
use crate::domain::detail::DetailCard;
use crate::domain::flight::GeoBox;
use crate::domain::map::{MapScene, Viewport};
use crate::domain::route::Route;
use crate::domain::table::{DocumentEvent, RowAction, SortField};
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct MapQuery {
    pub flight: Option<u64>,
}

#[derive(Deserialize)]
pub struct DismissQuery {
    pub event: Option<DocumentEvent>,
}

#[derive(Deserialize)]
pub struct MenuPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Deserialize)]
pub struct ViewportReport {
    pub lat: f64,
    pub lon: f64,
    pub zoom: f64,
}

/// Where the browser should go next.
#[derive(Debug, Serialize)]
pub struct Navigation {
    pub route: Route,
    pub href: String,
}

impl From<Route> for Navigation {
    fn from(route: Route) -> Self {
        Self {
            href: route.path(),
            route,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DetailPage {
    Empty,
    Loading,
    Loaded { flight: DetailCard },
    NotFound { message: String },
    Error { message: String },
    /// The operator navigated to another flight before this one loaded.
    Superseded { id: u64 },
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

fn flights_page(state: &AppState) -> Json<FlightsPageView> {
    Json(state.flights.view())
}

/// Flights table page
pub async fn flights_view(State(state): State<Arc<AppState>>) -> Json<FlightsPageView> {
    flights_page(&state)
}

pub async fn sort_flights(
    Path(field): Path<SortField>,
    State(state): State<Arc<AppState>>,
) -> Json<FlightsPageView> {
    state.flights.click_header(field);
    flights_page(&state)
}

pub async fn set_page_size(
    Path(size): Path<usize>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    if !state.flights.set_page_size(size) {
        return (
            StatusCode::BAD_REQUEST,
            format!("Unsupported page size: {}", size),
        )
            .into_response();
    }
    flights_page(&state).into_response()
}

pub async fn next_page(State(state): State<Arc<AppState>>) -> Json<FlightsPageView> {
    state.flights.next_page();
    flights_page(&state)
}

pub async fn previous_page(State(state): State<Arc<AppState>>) -> Json<FlightsPageView> {
    state.flights.previous_page();
    flights_page(&state)
}

pub async fn refresh_flights(State(state): State<Arc<AppState>>) -> Json<FlightsPageView> {
    state.flights.refresh();
    flights_page(&state)
}

/// Primary click on a table row.
pub async fn activate_row(
    Path(id): Path<u64>,
    State(state): State<Arc<AppState>>,
) -> Json<Navigation> {
    Json(state.flights.activate_row(id).into())
}

/// Secondary click on a table row.
pub async fn open_menu(
    Path(id): Path<u64>,
    State(state): State<Arc<AppState>>,
    Json(position): Json<MenuPosition>,
) -> Json<FlightsPageView> {
    state.flights.open_menu(id, position.x, position.y);
    flights_page(&state)
}

pub async fn menu_action(
    Path(action): Path<RowAction>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    match state.flights.choose(action) {
        Some(route) => Json(Navigation::from(route)).into_response(),
        None => (StatusCode::CONFLICT, "No row menu is open").into_response(),
    }
}

/// Click elsewhere or scroll while the row menu is open.
pub async fn dismiss_menu(
    Query(query): Query<DismissQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<FlightsPageView> {
    state
        .flights
        .document_event(query.event.unwrap_or(DocumentEvent::Click));
    flights_page(&state)
}

/// Flight detail page. Every visit refetches; the response waits for that
/// fetch to settle. A visit superseded by a navigation to another flight
/// answers 409 rather than that flight's state.
pub async fn flight_detail(
    Path(id): Path<u64>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let mut updates = state.detail.subscribe();
    state.detail.navigate(id);
    if updates
        .wait_for(|detail| detail.id != Some(id) || !detail.loading)
        .await
        .is_err()
    {
        tracing::warn!("Detail loader closed while loading flight {}", id);
    }

    let snapshot = state.detail.snapshot();
    if snapshot.id != Some(id) {
        tracing::debug!("Detail visit to flight {} superseded", id);
        return (StatusCode::CONFLICT, Json(DetailPage::Superseded { id }));
    }

    match snapshot.outcome() {
        DetailOutcome::Empty => (StatusCode::OK, Json(DetailPage::Empty)),
        DetailOutcome::Loading => (StatusCode::ACCEPTED, Json(DetailPage::Loading)),
        DetailOutcome::Loaded(flight) => (
            StatusCode::OK,
            Json(DetailPage::Loaded {
                flight: DetailCard::from_flight(&flight),
            }),
        ),
        DetailOutcome::NotFound(message) => {
            (StatusCode::NOT_FOUND, Json(DetailPage::NotFound { message }))
        }
        DetailOutcome::Failed(message) => {
            (StatusCode::BAD_GATEWAY, Json(DetailPage::Error { message }))
        }
    }
}

/// Map page; `?flight=` mounts it with an auto-select target.
pub async fn map_view(
    Query(query): Query<MapQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<MapScene> {
    Json(state.open_map(query.flight, |map| map.render()))
}

/// Marker click.
pub async fn map_select(
    Path(id): Path<u64>,
    State(state): State<Arc<AppState>>,
) -> Json<MapScene> {
    Json(state.with_map(|map| {
        map.click(id);
        map.render()
    }))
}

pub async fn map_clear(State(state): State<Arc<AppState>>) -> Json<MapScene> {
    Json(state.with_map(|map| {
        map.clear_selection();
        map.render()
    }))
}

pub async fn map_refresh(State(state): State<Arc<AppState>>) -> Json<MapScene> {
    Json(state.with_map(|map| {
        map.refresh();
        map.render()
    }))
}

pub async fn geobox_defaults() -> Json<GeoBox> {
    Json(GeoBox::default())
}

pub async fn geobox_search(
    State(state): State<Arc<AppState>>,
    Json(geo_box): Json<GeoBox>,
) -> Json<MapScene> {
    Json(state.with_map(|map| {
        map.search_box(geo_box);
        map.render()
    }))
}

pub async fn geobox_clear(State(state): State<Arc<AppState>>) -> Json<MapScene> {
    Json(state.with_map(|map| {
        map.clear_filter();
        map.render()
    }))
}

/// The user panned or zoomed; pending camera moves are dropped.
pub async fn map_viewport(
    State(state): State<Arc<AppState>>,
    Json(report): Json<ViewportReport>,
) -> StatusCode {
    state.with_map(|map| {
        map.user_moved(Viewport {
            center: (report.lat, report.lon),
            zoom: report.zoom,
        })
    });
    StatusCode::NO_CONTENT
}
