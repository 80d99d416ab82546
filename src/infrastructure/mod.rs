// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod flight_api_client;
