// Visual encoding of earthquake records: color bin, marker size, time window, popup
use crate::domain::earthquake::EarthquakeEvent;
use chrono::DateTime;
use serde::Serialize;

/// How long each unit of magnitude keeps a marker visible on the timeline.
pub const MILLIS_PER_MAGNITUDE: f64 = 10_000_000.0;

/// Marker radius per unit of magnitude.
pub const RADIUS_PER_MAGNITUDE: f64 = 5.0;

/// The six magnitude bins, coolest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MagnitudeColor {
    GreenYellow,
    YellowGreen,
    Yellow,
    Gold,
    Orange,
    Red,
}

impl MagnitudeColor {
    pub const ALL: [MagnitudeColor; 6] = [
        MagnitudeColor::GreenYellow,
        MagnitudeColor::YellowGreen,
        MagnitudeColor::Yellow,
        MagnitudeColor::Gold,
        MagnitudeColor::Orange,
        MagnitudeColor::Red,
    ];

    /// 0 for the coolest bin up to 5 for the warmest.
    pub fn rank(self) -> u8 {
        match self {
            MagnitudeColor::GreenYellow => 0,
            MagnitudeColor::YellowGreen => 1,
            MagnitudeColor::Yellow => 2,
            MagnitudeColor::Gold => 3,
            MagnitudeColor::Orange => 4,
            MagnitudeColor::Red => 5,
        }
    }

    pub fn css_name(self) -> &'static str {
        match self {
            MagnitudeColor::GreenYellow => "greenyellow",
            MagnitudeColor::YellowGreen => "yellowgreen",
            MagnitudeColor::Yellow => "yellow",
            MagnitudeColor::Gold => "gold",
            MagnitudeColor::Orange => "orange",
            MagnitudeColor::Red => "red",
        }
    }
}

/// Bin thresholds in strictly descending order. A magnitude lands in the
/// first bin whose threshold it exceeds; anything left over is GreenYellow.
const COLOR_BINS: [(f64, MagnitudeColor); 5] = [
    (5.0, MagnitudeColor::Red),
    (4.0, MagnitudeColor::Orange),
    (3.0, MagnitudeColor::Gold),
    (2.0, MagnitudeColor::Yellow),
    (1.0, MagnitudeColor::YellowGreen),
];

const DEFAULT_COLOR: MagnitudeColor = MagnitudeColor::GreenYellow;

pub fn choose_color(magnitude: f64) -> MagnitudeColor {
    COLOR_BINS
        .iter()
        .find(|(threshold, _)| magnitude > *threshold)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_COLOR)
}

/// Linear in magnitude and never clamped, so zero or negative magnitudes
/// produce non-positive radii.
pub fn marker_size(magnitude: f64) -> f64 {
    magnitude * RADIUS_PER_MAGNITUDE
}

/// Visibility interval on the timeline, in epoch millis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub start: i64,
    pub end: i64,
}

impl TimeWindow {
    pub fn contains(&self, time_millis: i64) -> bool {
        self.start <= time_millis && time_millis <= self.end
    }
}

pub fn compute_time_window(event: &EarthquakeEvent) -> TimeWindow {
    let start = event.timestamp_millis;
    let duration = (event.magnitude * MILLIS_PER_MAGNITUDE).round() as i64;
    TimeWindow {
        start,
        end: start.saturating_add(duration),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualEncoding {
    pub color: MagnitudeColor,
    pub radius: f64,
    pub time_window: TimeWindow,
}

pub fn encode(event: &EarthquakeEvent) -> VisualEncoding {
    VisualEncoding {
        color: choose_color(event.magnitude),
        radius: marker_size(event.magnitude),
        time_window: compute_time_window(event),
    }
}

/// Popup body: place, event time, magnitude.
pub fn popup_text(event: &EarthquakeEvent) -> String {
    format!(
        "<h3>{}</h3><hr><p>{}</p><hr><p>Magnitude: {}</p>",
        escape_html(&event.place),
        format_timestamp(event.timestamp_millis),
        event.magnitude
    )
}

/// Human-readable UTC date, or the raw millis when chrono cannot represent it.
pub fn format_timestamp(timestamp_millis: i64) -> String {
    match DateTime::from_timestamp_millis(timestamp_millis) {
        Some(time) => time.format("%a %b %d %Y %H:%M:%S UTC").to_string(),
        None => timestamp_millis.to_string(),
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
