// Map service - Live positions, geo-box filter and track selection
use crate::application::flight_poller::{FlightListState, PageRequest, PollHandle};
use crate::application::flight_repository::FlightRepository;
use crate::domain::flight::GeoBox;
use crate::domain::map::{Camera, MapScene, MapState, Selection, SelectionChange, Viewport};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

struct MapSession {
    map: MapState,
    /// Poll revision last copied into `map`.
    seen_revision: u64,
    /// Flight to select once the first poll lands.
    auto_select: Option<u64>,
    selection_token: CancellationToken,
    filter_token: CancellationToken,
}

struct MapInner {
    repository: Arc<dyn FlightRepository>,
    session: Mutex<MapSession>,
}

impl MapInner {
    fn lock(&self) -> MutexGuard<'_, MapSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A mounted map page. Owns its own flight poll; a geo-box result replaces
/// the polled list until cleared.
pub struct MapController {
    inner: Arc<MapInner>,
    poll: PollHandle,
    sync_token: CancellationToken,
    focus: Option<u64>,
}

impl MapController {
    pub fn mount(
        repository: Arc<dyn FlightRepository>,
        poll_interval: Duration,
        camera: Camera,
        focus: Option<u64>,
    ) -> Self {
        let poll = PollHandle::mount(repository.clone(), PageRequest::default(), poll_interval);
        let inner = Arc::new(MapInner {
            repository,
            session: Mutex::new(MapSession {
                map: MapState::new(camera),
                seen_revision: 0,
                auto_select: focus,
                selection_token: CancellationToken::new(),
                filter_token: CancellationToken::new(),
            }),
        });

        let sync_token = CancellationToken::new();
        tokio::spawn(follow_poll(inner.clone(), poll.subscribe(), sync_token.clone()));

        Self {
            inner,
            poll,
            sync_token,
            focus,
        }
    }

    /// Flight requested by the page URL, if any.
    pub fn focus(&self) -> Option<u64> {
        self.focus
    }

    /// Marker click: select, switch, or deselect when already selected.
    pub fn click(&self, flight_id: u64) {
        change_selection(&self.inner, |selection| selection.click(flight_id));
    }

    /// Programmatic selection; leaves an existing selection of the same flight alone.
    pub fn select(&self, flight_id: u64) {
        change_selection(&self.inner, |selection| selection.select(flight_id));
    }

    /// Forces the map back to no selection.
    pub fn clear_selection(&self) {
        change_selection(&self.inner, Selection::clear);
    }

    pub fn selection(&self) -> Selection {
        self.inner.lock().map.selection.clone()
    }

    /// Replaces the displayed list with the flights inside `geo_box`.
    pub fn search_box(&self, geo_box: GeoBox) {
        let token = CancellationToken::new();
        {
            let mut session = self.inner.lock();
            session.filter_token.cancel();
            session.filter_token = token.clone();
            session.map.geo_box_loading = true;
            session.map.geo_box_error = None;
        }

        tracing::debug!(
            "Geo box search: north={}, south={}, east={}, west={}",
            geo_box.north,
            geo_box.south,
            geo_box.east,
            geo_box.west
        );

        let inner = self.inner.clone();
        tokio::spawn(async move {
            let result = inner.repository.list_flights_in_box(geo_box).await;

            let mut session = inner.lock();
            if token.is_cancelled() {
                tracing::debug!("Dropping stale geo box result");
                return;
            }
            session.map.geo_box_loading = false;
            match result {
                Ok(flights) => session.map.filter_applied(flights),
                Err(e) => {
                    tracing::warn!("Error searching geo box: {}", e);
                    session.map.geo_box_error = Some(e.to_string());
                }
            }
        });
    }

    /// Back to the polled list; any search still in flight is discarded.
    pub fn clear_filter(&self) {
        let mut session = self.inner.lock();
        session.filter_token.cancel();
        session.map.filter_cleared();
        run_auto_select(&self.inner, session);
    }

    /// The user panned or zoomed the map.
    pub fn user_moved(&self, viewport: Viewport) {
        self.inner.lock().map.camera.user_moved(viewport);
    }

    pub fn refresh(&self) {
        self.poll.refresh();
    }

    pub fn render(&self) -> MapScene {
        self.inner.lock().map.render()
    }
}

impl Drop for MapController {
    fn drop(&mut self) {
        self.sync_token.cancel();
        let session = self.inner.lock();
        session.selection_token.cancel();
        session.filter_token.cancel();
    }
}

fn change_selection<F>(inner: &Arc<MapInner>, transition: F)
where
    F: FnOnce(&mut Selection) -> SelectionChange,
{
    let mut session = inner.lock();
    match transition(&mut session.map.selection) {
        SelectionChange::FetchTrack(flight_id) => {
            let token = CancellationToken::new();
            session.selection_token.cancel();
            session.selection_token = token.clone();
            drop(session);

            tracing::debug!("Selected flight {}, fetching track", flight_id);
            tokio::spawn(fetch_track(inner.clone(), flight_id, token));
        }
        SelectionChange::Cleared => {
            session.selection_token.cancel();
            tracing::debug!("Selection cleared");
        }
        SelectionChange::Unchanged => {}
    }
}

async fn fetch_track(inner: Arc<MapInner>, flight_id: u64, token: CancellationToken) {
    let result = inner.repository.get_flight_track(flight_id).await;

    let mut session = inner.lock();
    if token.is_cancelled() {
        tracing::debug!("Dropping stale track for flight {}", flight_id);
        return;
    }

    match result {
        Ok(track) => {
            session.map.track_loaded(flight_id, track);
        }
        Err(e) => {
            // The map shows no overlay rather than an error banner.
            tracing::debug!("Track for flight {} unavailable: {}", flight_id, e);
            session.map.selection.track_failed(flight_id);
        }
    }
}

/// Copies each poll result into the map and runs the one-time auto-select.
async fn follow_poll(
    inner: Arc<MapInner>,
    mut updates: watch::Receiver<FlightListState>,
    token: CancellationToken,
) {
    loop {
        let snapshot = updates.borrow_and_update().clone();
        apply_poll(&inner, snapshot);

        tokio::select! {
            biased;
            () = token.cancelled() => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }
    }
}

fn apply_poll(inner: &Arc<MapInner>, snapshot: FlightListState) {
    let mut session = inner.lock();
    session.map.poll_loading = snapshot.loading;
    session.map.poll_error = snapshot.error;

    if snapshot.revision == session.seen_revision {
        return;
    }
    session.seen_revision = snapshot.revision;
    session.map.poll_succeeded(snapshot.flights);
    run_auto_select(inner, session);
}

/// Selects the deep-linked flight once the unfiltered list has loaded.
/// Waits while a geo-box result is on screen.
fn run_auto_select(inner: &Arc<MapInner>, mut session: MutexGuard<'_, MapSession>) {
    if session.seen_revision == 0 || session.map.filtered.is_some() {
        return;
    }
    if let Some(flight_id) = session.auto_select.take() {
        drop(session);
        tracing::info!("Auto-selecting flight {} from page URL", flight_id);
        change_selection(inner, |selection| selection.select(flight_id));
    }
}
