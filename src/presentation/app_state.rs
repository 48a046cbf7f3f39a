// Application state for HTTP handlers
use crate::application::map_service::MapService;

#[derive(Clone)]
pub struct AppState {
    pub map_service: MapService,
}
