// Feed domain models
use serde::Serialize;

/// A single earthquake record from the real-time feed.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeEvent {
    pub longitude: f64,
    pub latitude: f64,
    pub magnitude: f64,
    pub place: String,
    pub timestamp_millis: i64,
}

impl EarthquakeEvent {
    pub fn new(
        longitude: f64,
        latitude: f64,
        magnitude: f64,
        place: String,
        timestamp_millis: i64,
    ) -> Self {
        Self {
            longitude,
            latitude,
            magnitude,
            place,
            timestamp_millis,
        }
    }

    /// Marker position; GeoJSON stores `[lon, lat]`, maps want `(lat, lon)`.
    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

/// A plate boundary path, coordinates kept in GeoJSON `(lon, lat)` order.
#[derive(Debug, Clone, PartialEq)]
pub struct FaultLineSegment {
    pub coordinates: Vec<(f64, f64)>,
}

impl FaultLineSegment {
    pub fn new(coordinates: Vec<(f64, f64)>) -> Self {
        Self { coordinates }
    }

    pub fn path(&self) -> Vec<LatLng> {
        self.coordinates
            .iter()
            .map(|&(lon, lat)| LatLng::new(lat, lon))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

impl LatLng {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}
