// Flights page service - Table state over a paged flight poll
use crate::application::flight_poller::{PageRequest, PollHandle};
use crate::application::flight_repository::FlightRepository;
use crate::domain::route::Route;
use crate::domain::table::{DocumentEvent, FlightTable, Pagination, RowAction, SortField, TableView};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightsPageView {
    pub loading: bool,
    /// Shown as a banner above the last good rows.
    pub error: Option<String>,
    pub table: TableView,
}

pub struct FlightTableService {
    poll: PollHandle,
    table: Mutex<FlightTable>,
}

impl FlightTableService {
    pub fn mount(
        repository: Arc<dyn FlightRepository>,
        poll_interval: Duration,
        pagination: Pagination,
    ) -> Self {
        let poll = PollHandle::mount(repository, page_request(&pagination), poll_interval);
        Self {
            poll,
            table: Mutex::new(FlightTable::new(pagination)),
        }
    }

    pub fn click_header(&self, field: SortField) {
        self.lock().click_header(field);
    }

    /// Returns false when `page_size` is not one of the offered sizes.
    pub fn set_page_size(&self, page_size: usize) -> bool {
        let mut table = self.lock();
        if !table.pagination_mut().set_page_size(page_size) {
            return false;
        }
        self.poll.set_params(page_request(table.pagination()));
        true
    }

    pub fn next_page(&self) -> bool {
        let returned = self.poll.snapshot().flights.len();
        let mut table = self.lock();
        if !table.pagination_mut().next(returned) {
            return false;
        }
        self.poll.set_params(page_request(table.pagination()));
        true
    }

    pub fn previous_page(&self) -> bool {
        let mut table = self.lock();
        if !table.pagination_mut().previous() {
            return false;
        }
        self.poll.set_params(page_request(table.pagination()));
        true
    }

    pub fn refresh(&self) {
        self.poll.refresh();
    }

    pub fn activate_row(&self, flight_id: u64) -> Route {
        self.lock().activate_row(flight_id)
    }

    pub fn open_menu(&self, flight_id: u64, x: f64, y: f64) {
        self.lock().open_menu(flight_id, x, y);
    }

    pub fn document_event(&self, event: DocumentEvent) {
        self.lock().on_document_event(event);
    }

    pub fn choose(&self, action: RowAction) -> Option<Route> {
        self.lock().choose(action)
    }

    pub fn view(&self) -> FlightsPageView {
        let state = self.poll.snapshot();
        FlightsPageView {
            loading: state.loading,
            error: state.error,
            table: self.lock().view(&state.flights),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FlightTable> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn page_request(pagination: &Pagination) -> PageRequest {
    PageRequest::new(pagination.limit(), pagination.offset())
}
