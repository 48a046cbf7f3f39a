// Presentation layer - HTTP routes
pub mod app_state;
pub mod handlers;
