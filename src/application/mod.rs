// Application layer - Services that keep views in sync with the upstream API
pub mod detail_service;
pub mod flight_poller;
pub mod flight_repository;
pub mod map_service;
pub mod table_service;

#[cfg(test)]
pub mod test_support;
