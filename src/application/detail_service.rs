// Detail service - Loads one flight's full record on demand
use crate::application::flight_repository::FlightRepository;
use crate::domain::flight::FlightDetail;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailState {
    pub id: Option<u64>,
    pub flight: Option<FlightDetail>,
    pub loading: bool,
    pub error: Option<String>,
    /// Set together with `error` when the upstream answered 404.
    pub not_found: bool,
}

/// What the detail page shows; the variants are mutually exclusive.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome {
    /// No identifier requested.
    Empty,
    Loading,
    Loaded(FlightDetail),
    NotFound(String),
    Failed(String),
}

impl DetailState {
    pub fn outcome(&self) -> DetailOutcome {
        if self.loading {
            return DetailOutcome::Loading;
        }
        match (&self.flight, &self.error) {
            (_, Some(message)) if self.not_found => DetailOutcome::NotFound(message.clone()),
            (_, Some(message)) => DetailOutcome::Failed(message.clone()),
            (Some(flight), None) => DetailOutcome::Loaded(flight.clone()),
            (None, None) => DetailOutcome::Empty,
        }
    }
}

/// Fetches a flight detail once per identifier change. Switching identifier
/// while a fetch is outstanding discards that fetch's result.
pub struct DetailLoader {
    repository: Arc<dyn FlightRepository>,
    state: Arc<watch::Sender<DetailState>>,
    current: Mutex<CancellationToken>,
}

impl DetailLoader {
    pub fn new(repository: Arc<dyn FlightRepository>) -> Self {
        let (state, _) = watch::channel(DetailState::default());
        Self {
            repository,
            state: Arc::new(state),
            current: Mutex::new(CancellationToken::new()),
        }
    }

    /// Follows an identifier; fetches only when it differs from the current one.
    pub fn load(&self, id: Option<u64>) {
        self.start(id, false);
    }

    /// A fresh visit to a detail page. Always refetches, even for the
    /// identifier already shown, and supersedes any fetch in flight.
    pub fn navigate(&self, id: u64) {
        self.start(Some(id), true);
    }

    fn start(&self, id: Option<u64>, refetch: bool) {
        let token = {
            let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
            let mut started = false;
            let token = CancellationToken::new();

            self.state.send_if_modified(|state| {
                if state.id == id && !refetch {
                    return false;
                }
                current.cancel();
                *current = token.clone();
                *state = DetailState {
                    id,
                    loading: id.is_some(),
                    ..Default::default()
                };
                started = true;
                true
            });

            if !started {
                return;
            }
            token
        };

        let Some(id) = id else {
            return;
        };

        tracing::debug!("Loading flight detail {}", id);
        let repository = self.repository.clone();
        let state = self.state.clone();

        tokio::spawn(async move {
            let result = repository.get_flight_detail(id).await;

            let applied = state.send_if_modified(|state| {
                if token.is_cancelled() {
                    return false;
                }
                match result {
                    Ok(flight) => state.flight = Some(flight),
                    Err(e) => {
                        if !e.is_not_found() {
                            tracing::warn!("Error fetching flight {}: {}", id, e);
                        }
                        state.not_found = e.is_not_found();
                        state.error = Some(e.to_string());
                    }
                }
                state.loading = false;
                true
            });

            if !applied {
                tracing::debug!("Dropping stale detail for flight {}", id);
            }
        });
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> DetailState {
        self.state.borrow().clone()
    }
}

impl Drop for DetailLoader {
    fn drop(&mut self) {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .cancel();
    }
}
