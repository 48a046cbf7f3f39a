// Mapper from GeoJSON feature collections to feed domain models
use crate::application::feed_repository::{FeedError, FeedKind};
use crate::domain::earthquake::{EarthquakeEvent, FaultLineSegment};
use geojson::{Feature, FeatureCollection, GeoJson, Value};

/// Parse a response body into a FeatureCollection; anything else is a fetch failure.
pub fn parse_collection(
    feed: FeedKind,
    url: &str,
    body: &str,
) -> Result<FeatureCollection, FeedError> {
    let geojson = body.parse::<GeoJson>().map_err(|e| FeedError::Fetch {
        feed,
        url: url.to_string(),
        reason: format!("invalid GeoJSON: {}", e),
    })?;

    match geojson {
        GeoJson::FeatureCollection(collection) => Ok(collection),
        _ => Err(FeedError::Fetch {
            feed,
            url: url.to_string(),
            reason: "expected a FeatureCollection".to_string(),
        }),
    }
}

pub fn earthquakes_from_collection(
    collection: &FeatureCollection,
) -> Result<Vec<EarthquakeEvent>, FeedError> {
    collection
        .features
        .iter()
        .enumerate()
        .map(|(index, feature)| {
            earthquake_from_feature(feature).map_err(|reason| FeedError::MalformedFeature {
                feed: FeedKind::Earthquakes,
                index,
                reason,
            })
        })
        .collect()
}

pub fn fault_lines_from_collection(
    collection: &FeatureCollection,
) -> Result<Vec<FaultLineSegment>, FeedError> {
    collection
        .features
        .iter()
        .enumerate()
        .map(|(index, feature)| {
            fault_line_from_feature(feature).map_err(|reason| FeedError::MalformedFeature {
                feed: FeedKind::FaultLines,
                index,
                reason,
            })
        })
        .collect()
}

fn earthquake_from_feature(feature: &Feature) -> Result<EarthquakeEvent, String> {
    let (longitude, latitude) = match feature.geometry.as_ref().map(|g| &g.value) {
        Some(Value::Point(position)) => lon_lat(position)?,
        Some(other) => {
            return Err(format!("expected Point geometry, got {}", geometry_name(other)));
        }
        None => return Err("missing geometry".to_string()),
    };

    let magnitude = feature
        .property("mag")
        .and_then(|v| v.as_f64())
        .ok_or("missing numeric property 'mag'")?;
    let place = feature
        .property("place")
        .and_then(|v| v.as_str())
        .ok_or("missing string property 'place'")?;
    let timestamp_millis = feature
        .property("time")
        .and_then(|v| v.as_i64())
        .ok_or("missing integer property 'time'")?;

    Ok(EarthquakeEvent::new(
        longitude,
        latitude,
        magnitude,
        place.to_string(),
        timestamp_millis,
    ))
}

fn fault_line_from_feature(feature: &Feature) -> Result<FaultLineSegment, String> {
    match feature.geometry.as_ref().map(|g| &g.value) {
        Some(Value::LineString(positions)) => {
            let coordinates = positions
                .iter()
                .map(|p| lon_lat(p))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(FaultLineSegment::new(coordinates))
        }
        Some(other) => Err(format!(
            "expected LineString geometry, got {}",
            geometry_name(other)
        )),
        None => Err("missing geometry".to_string()),
    }
}

fn geometry_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

fn lon_lat(position: &[f64]) -> Result<(f64, f64), String> {
    match position {
        [lon, lat, ..] => Ok((*lon, *lat)),
        _ => Err(format!("position has {} coordinates, need 2", position.len())),
    }
}
