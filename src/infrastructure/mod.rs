// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod geojson_mapper;
pub mod http_response;
pub mod leaflet_renderer;
pub mod usgs_repository;
