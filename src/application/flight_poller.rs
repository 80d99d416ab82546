// Flight list polling - keeps one page of live flights fresh
use crate::application::flight_repository::FlightRepository;
use crate::domain::flight::FlightSummary;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(15_000);
pub const DEFAULT_PAGE_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: usize,
    pub offset: usize,
}

impl PageRequest {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT, 0)
    }
}

/// Latest known page of flights. A failed fetch keeps `flights` and only
/// sets `error`; the next success clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightListState {
    pub flights: Vec<FlightSummary>,
    pub loading: bool,
    pub error: Option<String>,
    /// Number of successful fetches applied so far.
    pub revision: u64,
    pub refreshed_at: Option<DateTime<Utc>>,
}

struct Subscription {
    params: PageRequest,
    token: CancellationToken,
}

/// A mounted flight list. Fetches immediately, then on every interval tick,
/// until the parameters change or the handle is dropped. Responses that land
/// after either of those are discarded.
pub struct PollHandle {
    repository: Arc<dyn FlightRepository>,
    interval: Duration,
    state: Arc<watch::Sender<FlightListState>>,
    subscription: Mutex<Subscription>,
}

impl PollHandle {
    pub fn mount(
        repository: Arc<dyn FlightRepository>,
        params: PageRequest,
        interval: Duration,
    ) -> Self {
        let (state, _) = watch::channel(FlightListState {
            loading: true,
            ..Default::default()
        });

        let handle = Self {
            repository,
            interval,
            state: Arc::new(state),
            subscription: Mutex::new(Subscription {
                params,
                token: CancellationToken::new(),
            }),
        };
        handle.restart(params);
        handle
    }

    pub fn params(&self) -> PageRequest {
        self.lock_subscription().params
    }

    /// New page window: fetch now and restart the interval from here.
    pub fn set_params(&self, params: PageRequest) {
        self.restart(params);
    }

    /// One extra fetch outside the interval cycle.
    pub fn refresh(&self) {
        let (params, token) = {
            let subscription = self.lock_subscription();
            (subscription.params, subscription.token.clone())
        };
        if token.is_cancelled() {
            return;
        }

        tracing::debug!("Manual refresh of flights (limit={}, offset={})", params.limit, params.offset);
        tokio::spawn(fetch_page(
            self.repository.clone(),
            self.state.clone(),
            params,
            token,
        ));
    }

    pub fn subscribe(&self) -> watch::Receiver<FlightListState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> FlightListState {
        self.state.borrow().clone()
    }

    /// Stops polling; in-flight responses are dropped when they arrive.
    pub fn teardown(&self) {
        let subscription = self.lock_subscription();
        self.state.send_if_modified(|_| {
            subscription.token.cancel();
            false
        });
    }

    fn restart(&self, params: PageRequest) {
        let token = CancellationToken::new();
        {
            let mut subscription = self.lock_subscription();
            let previous = std::mem::replace(
                &mut *subscription,
                Subscription {
                    params,
                    token: token.clone(),
                },
            );
            // Cancel under the state lock so no stale write can slip in between.
            self.state.send_modify(|state| {
                previous.token.cancel();
                state.loading = true;
            });
        }

        tracing::debug!(
            "Polling flights every {:?} (limit={}, offset={})",
            self.interval,
            params.limit,
            params.offset
        );
        tokio::spawn(poll_loop(
            self.repository.clone(),
            self.state.clone(),
            params,
            self.interval,
            token,
        ));
    }

    fn lock_subscription(&self) -> std::sync::MutexGuard<'_, Subscription> {
        self.subscription.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

async fn poll_loop(
    repository: Arc<dyn FlightRepository>,
    state: Arc<watch::Sender<FlightListState>>,
    params: PageRequest,
    period: Duration,
    token: CancellationToken,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            () = token.cancelled() => break,
            _ = ticker.tick() => {
                tokio::spawn(fetch_page(repository.clone(), state.clone(), params, token.clone()));
            }
        }
    }

    tracing::debug!("Stopped polling flights (limit={}, offset={})", params.limit, params.offset);
}

async fn fetch_page(
    repository: Arc<dyn FlightRepository>,
    state: Arc<watch::Sender<FlightListState>>,
    params: PageRequest,
    token: CancellationToken,
) {
    let result = repository.list_flights(params.limit, params.offset).await;

    let applied = state.send_if_modified(|state| {
        if token.is_cancelled() {
            return false;
        }
        match result {
            Ok(flights) => {
                state.flights = flights;
                state.error = None;
                state.revision += 1;
                state.refreshed_at = Some(Utc::now());
            }
            Err(e) => {
                tracing::warn!("Error fetching flights: {}", e);
                state.error = Some(e.to_string());
            }
        }
        state.loading = false;
        true
    });

    if !applied {
        tracing::debug!(
            "Dropping stale flight list (limit={}, offset={})",
            params.limit,
            params.offset
        );
    }
}
