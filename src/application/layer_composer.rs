// Layer composer - One primitive per input feature, in input order
use crate::domain::earthquake::{EarthquakeEvent, FaultLineSegment};
use crate::domain::encoding::{encode, popup_text};
use crate::domain::layer::{
    CircleMarker, FaultLineLayer, LayerSet, PathStyle, PointLayer, Polyline, TimedMarker,
    TimelineLayer,
};

pub const EARTHQUAKES_LAYER: &str = "Earthquakes";
pub const FAULT_LINES_LAYER: &str = "Fault Lines";

pub fn compose_layers(events: &[EarthquakeEvent], segments: &[FaultLineSegment]) -> LayerSet {
    let layers = LayerSet {
        earthquakes: point_layer(events),
        fault_lines: fault_line_layer(segments),
        timeline: timeline_layer(events),
    };

    tracing::debug!(
        "Composed {} markers, {} fault lines, {} timed markers",
        layers.earthquakes.markers.len(),
        layers.fault_lines.lines.len(),
        layers.timeline.markers.len()
    );

    layers
}

pub fn point_layer(events: &[EarthquakeEvent]) -> PointLayer {
    PointLayer {
        name: EARTHQUAKES_LAYER.to_string(),
        markers: events.iter().map(circle_marker).collect(),
    }
}

pub fn fault_line_layer(segments: &[FaultLineSegment]) -> FaultLineLayer {
    FaultLineLayer {
        name: FAULT_LINES_LAYER.to_string(),
        lines: segments
            .iter()
            .map(|segment| Polyline {
                path: segment.path(),
                style: PathStyle::fault_line(),
            })
            .collect(),
    }
}

pub fn timeline_layer(events: &[EarthquakeEvent]) -> TimelineLayer {
    TimelineLayer {
        markers: events
            .iter()
            .map(|event| TimedMarker {
                marker: circle_marker(event),
                interval: encode(event).time_window,
            })
            .collect(),
    }
}

fn circle_marker(event: &EarthquakeEvent) -> CircleMarker {
    let encoding = encode(event);
    CircleMarker {
        position: event.position(),
        radius: encoding.radius,
        color: encoding.color,
        fill_color: encoding.color,
        fill_opacity: 1.0,
        popup: popup_text(event),
    }
}
