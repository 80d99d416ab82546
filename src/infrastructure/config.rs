use crate::domain::map::{Camera, Viewport};
use crate::domain::table::Pagination;
use anyhow::bail;
use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub api: ApiSettings,
    pub polling: PollingSettings,
    pub table: TableSettings,
    pub map: MapSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    /// 0 disables the client-side timeout.
    pub timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PollingSettings {
    pub interval_ms: u64,
    pub default_limit: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TableSettings {
    pub page_sizes: Vec<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MapSettings {
    /// [lat, lon]
    pub default_center: [f64; 2],
    pub default_zoom: f64,
    pub fit_padding: u32,
}

impl DashboardConfig {
    /// Rejects settings the poller and pager cannot run with.
    pub fn validated(self) -> anyhow::Result<Self> {
        if self.polling.interval_ms == 0 {
            bail!("polling.interval_ms must be greater than zero");
        }
        if self.polling.default_limit == 0 {
            bail!("polling.default_limit must be greater than zero");
        }
        if self.table.page_sizes.is_empty() {
            bail!("table.page_sizes must list at least one size");
        }
        if self.table.page_sizes.contains(&0) {
            bail!("table.page_sizes must not contain 0");
        }
        Ok(self)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.polling.interval_ms)
    }

    pub fn api_timeout(&self) -> Option<Duration> {
        match self.api.timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.table.page_sizes.clone(), self.polling.default_limit)
    }

    pub fn camera(&self) -> Camera {
        let [lat, lon] = self.map.default_center;
        Camera::new(
            Viewport {
                center: (lat, lon),
                zoom: self.map.default_zoom,
            },
            self.map.fit_padding,
        )
    }
}

fn with_defaults() -> anyhow::Result<ConfigBuilder<DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.bind", "127.0.0.1:8080")?
        .set_default("api.base_url", "http://localhost:3000/api")?
        .set_default("api.timeout_ms", 0)?
        .set_default("polling.interval_ms", 15_000)?
        .set_default("polling.default_limit", 50)?
        .set_default("table.page_sizes", vec![25, 50, 100])?
        .set_default("map.default_center", vec![39.8283, -98.5795])?
        .set_default("map.default_zoom", 4.0)?
        .set_default("map.fit_padding", 50)?)
}

/// Defaults, then `config/dashboard.{toml,...}` if present, then
/// `FLIGHT_WATCH__SECTION__KEY` environment overrides.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = with_defaults()?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("FLIGHT_WATCH")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<DashboardConfig>()?.validated()
}
