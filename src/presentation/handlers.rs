// HTTP request handlers
use crate::infrastructure::http_response::{accepts_brotli, encoded_response, HTML, JSON};
use crate::infrastructure::leaflet_renderer::{render_error_html, render_html};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct TimelineQuery {
    /// Epoch millis; defaults to the start of the timeline
    pub at: Option<i64>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Interactive map page
pub async fn map_page(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let compress = accepts_brotli(&headers);

    let (status, page) = match state.map_service.build_map().await {
        Ok(view) => match render_html(&view) {
            Ok(page) => (StatusCode::OK, page),
            Err(e) => {
                tracing::error!("Error rendering map: {}", e);
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        },
        Err(e) => {
            tracing::error!("Error building map: {}", e);
            (StatusCode::BAD_GATEWAY, render_error_html(&e.to_string()))
        }
    };

    match encoded_response(status, HTML, page.into_bytes(), compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Assembled map model as JSON
pub async fn map_json(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let compress = accepts_brotli(&headers);

    let (status, body) = match state.map_service.build_map().await {
        Ok(view) => match serde_json::to_vec(&view) {
            Ok(body) => (StatusCode::OK, body),
            Err(e) => {
                tracing::error!("Error serializing map: {}", e);
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        },
        Err(e) => {
            tracing::error!("Error building map: {}", e);
            let body = serde_json::json!({ "error": e.to_string() }).to_string();
            (StatusCode::BAD_GATEWAY, body.into_bytes())
        }
    };

    match encoded_response(status, JSON, body, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Timeline markers visible at one slider position
pub async fn timeline_at(
    Query(query): Query<TimelineQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let compress = accepts_brotli(&headers);

    let (status, body) = match state.map_service.build_map().await {
        Ok(view) => {
            let timeline = &view.layers.timeline;
            let at = query
                .at
                .or_else(|| timeline.bounds().map(|bounds| bounds.start));
            let markers = at.map(|t| timeline.visible_at(t)).unwrap_or_default();
            tracing::debug!("{} timeline markers visible at {:?}", markers.len(), at);

            let body = serde_json::json!({ "at": at, "markers": markers }).to_string();
            (StatusCode::OK, body.into_bytes())
        }
        Err(e) => {
            tracing::error!("Error building map: {}", e);
            let body = serde_json::json!({ "error": e.to_string() }).to_string();
            (StatusCode::BAD_GATEWAY, body.into_bytes())
        }
    };

    match encoded_response(status, JSON, body, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}
