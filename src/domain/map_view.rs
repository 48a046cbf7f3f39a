// Assembled map view: base surfaces, overlays, legend, time slider
use super::earthquake::LatLng;
use super::encoding::{MagnitudeColor, TimeWindow};
use super::layer::LayerSet;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseSurface {
    pub label: String,
    pub url_template: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OverlayLayer {
    Earthquakes,
    FaultLines,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overlay {
    pub label: String,
    pub layer: OverlayLayer,
    pub visible_on_load: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: MagnitudeColor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlider {
    /// Full range of the timeline layer, absent when there are no events.
    pub bounds: Option<TimeWindow>,
    /// Wall-clock length of one playback sweep.
    pub duration_ms: u64,
    pub steps: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: u8,
    pub scroll_wheel_zoom: bool,
    pub layer_control_collapsed: bool,
    pub legend_position: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub options: MapOptions,
    pub base_surfaces: Vec<BaseSurface>,
    /// Index into `base_surfaces` shown on load.
    pub default_base: usize,
    pub overlays: Vec<Overlay>,
    pub legend: Vec<LegendEntry>,
    pub time_slider: TimeSlider,
    pub layers: LayerSet,
}

impl MapView {
    pub fn default_base_surface(&self) -> Option<&BaseSurface> {
        self.base_surfaces.get(self.default_base)
    }

    pub fn visible_overlays(&self) -> impl Iterator<Item = &Overlay> {
        self.overlays.iter().filter(|o| o.visible_on_load)
    }
}
