// Application state for HTTP handlers
use crate::application::detail_service::DetailLoader;
use crate::application::flight_repository::FlightRepository;
use crate::application::map_service::MapController;
use crate::application::table_service::FlightTableService;
use crate::infrastructure::config::DashboardConfig;
use std::sync::{Arc, Mutex, PoisonError};

/// One dashboard session: the flights page, the detail page and the map page.
pub struct AppState {
    pub config: DashboardConfig,
    pub repository: Arc<dyn FlightRepository>,
    pub flights: FlightTableService,
    pub detail: DetailLoader,
    map: Mutex<Option<MapController>>,
}

impl AppState {
    pub fn new(config: DashboardConfig, repository: Arc<dyn FlightRepository>) -> Self {
        let flights = FlightTableService::mount(
            repository.clone(),
            config.poll_interval(),
            config.pagination(),
        );
        let detail = DetailLoader::new(repository.clone());

        Self {
            config,
            repository,
            flights,
            detail,
            map: Mutex::new(None),
        }
    }

    /// Opens the map page for `focus`, remounting it when the deep link
    /// target differs from the mounted one.
    pub fn open_map<R>(&self, focus: Option<u64>, f: impl FnOnce(&MapController) -> R) -> R {
        let mut map = self.map.lock().unwrap_or_else(PoisonError::into_inner);
        let controller = match map.take() {
            Some(controller) if controller.focus() == focus => controller,
            previous => {
                // Tear the old page down before the new one starts polling.
                drop(previous);
                tracing::info!("Mounting map view (focus={:?})", focus);
                self.mount_map(focus)
            }
        };
        f(map.insert(controller))
    }

    /// Runs `f` on the mounted map, mounting an unfocused one if needed.
    pub fn with_map<R>(&self, f: impl FnOnce(&MapController) -> R) -> R {
        let mut map = self.map.lock().unwrap_or_else(PoisonError::into_inner);
        f(map.get_or_insert_with(|| self.mount_map(None)))
    }

    fn mount_map(&self, focus: Option<u64>) -> MapController {
        MapController::mount(
            self.repository.clone(),
            self.config.poll_interval(),
            self.config.camera(),
            focus,
        )
    }
}
