// Map assembler - Base surfaces, overlays, legend and time slider around the layers
use crate::domain::earthquake::LatLng;
use crate::domain::encoding::choose_color;
use crate::domain::layer::LayerSet;
use crate::domain::map_view::{
    BaseSurface, LegendEntry, MapOptions, MapView, Overlay, OverlayLayer, TimeSlider,
};
use crate::infrastructure::config::{tile_url, MapSettings, TilesConfig};
use thiserror::Error;

use super::layer_composer::{EARTHQUAKES_LAYER, FAULT_LINES_LAYER};

#[derive(Debug, Error, PartialEq)]
pub enum AssemblyError {
    #[error("no base surface configured")]
    NoBaseSurface,
}

const LEGEND_GRADES: [u8; 6] = [0, 1, 2, 3, 4, 5];

#[derive(Debug, Clone)]
pub struct MapAssembler {
    tiles: TilesConfig,
    settings: MapSettings,
}

impl MapAssembler {
    pub fn new(tiles: TilesConfig, settings: MapSettings) -> Self {
        Self { tiles, settings }
    }

    pub fn assemble(&self, layers: LayerSet) -> Result<MapView, AssemblyError> {
        let base_surfaces = self.base_surfaces();
        if base_surfaces.is_empty() {
            return Err(AssemblyError::NoBaseSurface);
        }

        let time_slider = TimeSlider {
            bounds: layers.timeline.bounds(),
            duration_ms: self.settings.slider_duration_ms,
            steps: self.settings.slider_steps,
        };

        Ok(MapView {
            options: MapOptions {
                center: LatLng::new(self.settings.center_lat, self.settings.center_lon),
                zoom: self.settings.zoom,
                scroll_wheel_zoom: self.settings.scroll_wheel_zoom,
                layer_control_collapsed: self.settings.layer_control_collapsed,
                legend_position: self.settings.legend_position.clone(),
            },
            base_surfaces,
            default_base: 0,
            overlays: overlays(),
            legend: legend(),
            time_slider,
            layers,
        })
    }

    fn base_surfaces(&self) -> Vec<BaseSurface> {
        self.tiles
            .styles
            .iter()
            .map(|style| BaseSurface {
                label: style.label.clone(),
                url_template: tile_url(
                    &self.tiles.url_template,
                    &style.style_id,
                    &self.tiles.access_token,
                ),
            })
            .collect()
    }
}

/// Earthquakes start hidden; fault lines show on load.
fn overlays() -> Vec<Overlay> {
    vec![
        Overlay {
            label: EARTHQUAKES_LAYER.to_string(),
            layer: OverlayLayer::Earthquakes,
            visible_on_load: false,
        },
        Overlay {
            label: FAULT_LINES_LAYER.to_string(),
            layer: OverlayLayer::FaultLines,
            visible_on_load: true,
        },
    ]
}

/// Six static entries, "0-1" through "5+", each colored by its bin.
pub fn legend() -> Vec<LegendEntry> {
    LEGEND_GRADES
        .iter()
        .enumerate()
        .map(|(i, &grade)| {
            let label = match LEGEND_GRADES.get(i + 1) {
                Some(next) => format!("{}-{}", grade, next),
                None => format!("{}+", grade),
            };
            LegendEntry {
                label,
                color: choose_color(f64::from(grade) + 1.0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::layer_composer::compose_layers;
    use crate::domain::earthquake::{EarthquakeEvent, FaultLineSegment};
    use crate::domain::encoding::{MagnitudeColor, TimeWindow};

    fn layers() -> LayerSet {
        compose_layers(
            &[
                EarthquakeEvent::new(-122.4, 37.8, 1.0, "A".to_string(), 5_000),
                EarthquakeEvent::new(-122.4, 37.8, 3.0, "B".to_string(), 1_000),
            ],
            &[FaultLineSegment::new(vec![(0.0, 0.0), (1.0, 1.0)])],
        )
    }

    fn assembler(access_token: &str) -> MapAssembler {
        let tiles = TilesConfig {
            access_token: access_token.to_string(),
            ..TilesConfig::default()
        };
        MapAssembler::new(tiles, MapSettings::default())
    }

    #[test]
    fn test_three_base_surfaces_with_token() {
        let view = assembler("tok").assemble(layers()).unwrap();
        let labels: Vec<&str> = view.base_surfaces.iter().map(|b| b.label.as_str()).collect();

        assert_eq!(labels, vec!["Outdoors", "Satellite", "Dark Map"]);
        assert!(view.base_surfaces[1].url_template.contains("/satellite-v9/"));
        assert!(view.base_surfaces.iter().all(|b| b.url_template.ends_with("access_token=tok")));
        assert_eq!(view.default_base_surface().unwrap().label, "Outdoors");
    }

    #[test]
    fn test_default_visibility() {
        let view = assembler("").assemble(layers()).unwrap();
        let visible: Vec<OverlayLayer> = view.visible_overlays().map(|o| o.layer).collect();

        assert_eq!(view.overlays.len(), 2);
        assert_eq!(visible, vec![OverlayLayer::FaultLines]);
    }

    #[test]
    fn test_legend() {
        let entries = legend();
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        let colors: Vec<MagnitudeColor> = entries.iter().map(|e| e.color).collect();

        assert_eq!(labels, vec!["0-1", "1-2", "2-3", "3-4", "4-5", "5+"]);
        assert_eq!(
            colors,
            vec![
                MagnitudeColor::GreenYellow,
                MagnitudeColor::YellowGreen,
                MagnitudeColor::Yellow,
                MagnitudeColor::Gold,
                MagnitudeColor::Orange,
                MagnitudeColor::Red,
            ]
        );
    }

    #[test]
    fn test_time_slider_bounds() {
        let view = assembler("").assemble(layers()).unwrap();

        assert_eq!(
            view.time_slider.bounds,
            Some(TimeWindow { start: 1_000, end: 30_001_000 })
        );
        assert_eq!(view.time_slider.duration_ms, 10_000);
        assert_eq!(view.time_slider.steps, 1000);
    }

    #[test]
    fn test_map_options_follow_settings() {
        let view = assembler("").assemble(layers()).unwrap();

        assert_eq!(view.options.center, LatLng::new(39.8283, -98.5785));
        assert_eq!(view.options.zoom, 3);
        assert!(!view.options.scroll_wheel_zoom);
        assert!(view.options.layer_control_collapsed);
    }

    #[test]
    fn test_no_base_surface() {
        let tiles = TilesConfig {
            styles: vec![],
            ..TilesConfig::default()
        };
        let result = MapAssembler::new(tiles, MapSettings::default()).assemble(layers());

        assert_eq!(result.unwrap_err(), AssemblyError::NoBaseSurface);
    }
}
