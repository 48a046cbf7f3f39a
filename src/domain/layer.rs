// Rendered layer primitives
use super::earthquake::LatLng;
use super::encoding::{MagnitudeColor, TimeWindow};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleMarker {
    pub position: LatLng,
    pub radius: f64,
    pub color: MagnitudeColor,
    pub fill_color: MagnitudeColor,
    pub fill_opacity: f64,
    pub popup: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathStyle {
    pub weight: u32,
    pub color: String,
}

impl PathStyle {
    pub fn fault_line() -> Self {
        Self {
            weight: 2,
            color: "blue".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyline {
    pub path: Vec<LatLng>,
    pub style: PathStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimedMarker {
    pub marker: CircleMarker,
    pub interval: TimeWindow,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointLayer {
    pub name: String,
    pub markers: Vec<CircleMarker>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaultLineLayer {
    pub name: String,
    pub lines: Vec<Polyline>,
}

/// Markers filtered by the time slider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineLayer {
    pub markers: Vec<TimedMarker>,
}

impl TimelineLayer {
    /// Markers whose interval covers `time_millis`, in layer order.
    pub fn visible_at(&self, time_millis: i64) -> Vec<&TimedMarker> {
        self.markers
            .iter()
            .filter(|m| m.interval.contains(time_millis))
            .collect()
    }

    /// Earliest start and latest end across all markers.
    pub fn bounds(&self) -> Option<TimeWindow> {
        let start = self.markers.iter().map(|m| m.interval.start).min()?;
        let end = self.markers.iter().map(|m| m.interval.end).max()?;
        Some(TimeWindow { start, end })
    }
}

/// Everything the composer produces from one pair of feeds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerSet {
    pub earthquakes: PointLayer,
    pub fault_lines: FaultLineLayer,
    pub timeline: TimelineLayer,
}
