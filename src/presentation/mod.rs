// Presentation layer - Routes serving dashboard views to the browser shell
pub mod app_state;
pub mod handlers;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::*;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/views/flights", get(flights_view))
        .route("/views/flights/sort/:field", post(sort_flights))
        .route("/views/flights/page-size/:size", post(set_page_size))
        .route("/views/flights/next", post(next_page))
        .route("/views/flights/prev", post(previous_page))
        .route("/views/flights/refresh", post(refresh_flights))
        .route("/views/flights/row/:id", post(activate_row))
        .route("/views/flights/menu/:id", post(open_menu))
        .route("/views/flights/menu/action/:action", post(menu_action))
        .route("/views/flights/dismiss", post(dismiss_menu))
        .route("/views/flight/:id", get(flight_detail))
        .route("/views/map", get(map_view))
        .route("/views/map/select/:id", post(map_select))
        .route("/views/map/clear", post(map_clear))
        .route("/views/map/refresh", post(map_refresh))
        .route(
            "/views/map/geobox",
            get(geobox_defaults).post(geobox_search).delete(geobox_clear),
        )
        .route("/views/map/viewport", post(map_viewport))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
