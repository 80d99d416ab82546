// Scripted repository for service tests
use crate::application::flight_repository::{ApiResult, FlightApiError, FlightRepository};
use crate::domain::flight::{FlightDetail, FlightSummary, GeoBox, TrackPoint};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::oneshot;

type Gate<T> = oneshot::Receiver<ApiResult<T>>;

/// Answers from queues filled by the test. List calls take a gate first,
/// then a queued result, then fall back to `default_list`. Gated calls
/// resolve only when the test sends on the matching sender.
#[derive(Default)]
pub struct MockRepository {
    pub list_calls: AtomicUsize,
    pub list_params: Mutex<Vec<(usize, usize)>>,
    pub list_results: Mutex<VecDeque<ApiResult<Vec<FlightSummary>>>>,
    pub list_gates: Mutex<VecDeque<Gate<Vec<FlightSummary>>>>,
    pub default_list: Mutex<Vec<FlightSummary>>,
    pub detail_calls: Mutex<Vec<u64>>,
    pub detail_gates: Mutex<HashMap<u64, Gate<FlightDetail>>>,
    pub box_calls: Mutex<Vec<GeoBox>>,
    pub box_gates: Mutex<VecDeque<Gate<Vec<FlightSummary>>>>,
    pub track_calls: Mutex<Vec<u64>>,
    pub track_gates: Mutex<HashMap<u64, Gate<Vec<TrackPoint>>>>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flights(flights: Vec<FlightSummary>) -> Self {
        let repo = Self::new();
        *repo.default_list.lock().unwrap() = flights;
        repo
    }

    pub fn queue_list(&self, result: ApiResult<Vec<FlightSummary>>) {
        self.list_results.lock().unwrap().push_back(result);
    }

    pub fn gate_list(&self) -> oneshot::Sender<ApiResult<Vec<FlightSummary>>> {
        let (tx, rx) = oneshot::channel();
        self.list_gates.lock().unwrap().push_back(rx);
        tx
    }

    pub fn gate_detail(&self, id: u64) -> oneshot::Sender<ApiResult<FlightDetail>> {
        let (tx, rx) = oneshot::channel();
        self.detail_gates.lock().unwrap().insert(id, rx);
        tx
    }

    pub fn gate_box(&self) -> oneshot::Sender<ApiResult<Vec<FlightSummary>>> {
        let (tx, rx) = oneshot::channel();
        self.box_gates.lock().unwrap().push_back(rx);
        tx
    }

    pub fn gate_track(&self, id: u64) -> oneshot::Sender<ApiResult<Vec<TrackPoint>>> {
        let (tx, rx) = oneshot::channel();
        self.track_gates.lock().unwrap().insert(id, rx);
        tx
    }

    pub fn list_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

fn closed<T>() -> ApiResult<T> {
    Err(FlightApiError::Transport("gate dropped".to_string()))
}

#[async_trait]
impl FlightRepository for MockRepository {
    async fn list_flights(&self, limit: usize, offset: usize) -> ApiResult<Vec<FlightSummary>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.list_params.lock().unwrap().push((limit, offset));
        let gate = self.list_gates.lock().unwrap().pop_front();
        if let Some(rx) = gate {
            return rx.await.unwrap_or_else(|_| closed());
        }
        let queued = self.list_results.lock().unwrap().pop_front();
        match queued {
            Some(result) => result,
            None => Ok(self.default_list.lock().unwrap().clone()),
        }
    }

    async fn get_flight_detail(&self, id: u64) -> ApiResult<FlightDetail> {
        self.detail_calls.lock().unwrap().push(id);
        let gate = self.detail_gates.lock().unwrap().remove(&id);
        match gate {
            Some(rx) => rx.await.unwrap_or_else(|_| closed()),
            None => Err(FlightApiError::NotFound { id }),
        }
    }

    async fn list_flights_in_box(&self, geo_box: GeoBox) -> ApiResult<Vec<FlightSummary>> {
        self.box_calls.lock().unwrap().push(geo_box);
        let gate = self.box_gates.lock().unwrap().pop_front();
        match gate {
            Some(rx) => rx.await.unwrap_or_else(|_| closed()),
            None => Ok(Vec::new()),
        }
    }

    async fn get_flight_track(&self, id: u64) -> ApiResult<Vec<TrackPoint>> {
        self.track_calls.lock().unwrap().push(id);
        let gate = self.track_gates.lock().unwrap().remove(&id);
        match gate {
            Some(rx) => rx.await.unwrap_or_else(|_| closed()),
            None => Ok(Vec::new()),
        }
    }
}

pub fn located(id: u64, lat: f64, lon: f64) -> FlightSummary {
    let mut flight = FlightSummary::new(id);
    flight.latitude = Some(lat);
    flight.longitude = Some(lon);
    flight
}

pub fn track(coords: &[(f64, f64)]) -> Vec<TrackPoint> {
    coords
        .iter()
        .enumerate()
        .map(|(i, &(lat, lon))| TrackPoint::new(i as u64 + 1, lat, lon))
        .collect()
}

/// Lets spawned tasks run to their next await point.
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}
