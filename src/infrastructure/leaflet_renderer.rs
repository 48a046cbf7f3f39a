// Renders an assembled map view as a Leaflet page
use crate::domain::encoding::escape_html;
use crate::domain::map_view::{LegendEntry, MapView};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialize map view: {0}")]
    Serialize(#[from] serde_json::Error),
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Earthquakes and Fault Lines</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
  <style>
    html, body, #map { height: 100%; margin: 0; }
    .legend { background: white; padding: 6px 8px; line-height: 18px; color: #555; border-radius: 4px; }
    .legend i { width: 18px; height: 18px; float: left; margin-right: 8px; }
  </style>
</head>
<body>
  <div id="map"></div>
  <template id="legend">__LEGEND__</template>
  <script type="application/json" id="map-view">__MAP_VIEW__</script>
  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
  <script src="https://unpkg.com/leaflet.timeline@1.6.0/dist/leaflet.timeline.js"></script>
  <script>
    const view = JSON.parse(document.getElementById('map-view').textContent);

    function marker(m) {
      return L.circleMarker([m.position.lat, m.position.lon], {
        radius: m.radius,
        color: m.color,
        fillColor: m.fillColor,
        fillOpacity: m.fillOpacity
      }).bindPopup(m.popup);
    }

    const earthquakes = L.layerGroup(view.layers.earthquakes.markers.map(marker));
    const faultLines = L.layerGroup(view.layers.faultLines.lines.map((line) =>
      L.polyline(line.path.map((p) => [p.lat, p.lon]), line.style)));
    const overlayLayers = { earthquakes: earthquakes, faultLines: faultLines };

    const baseMaps = {};
    view.baseSurfaces.forEach((b) => { baseMaps[b.label] = L.tileLayer(b.urlTemplate); });
    const overlayMaps = {};
    view.overlays.forEach((o) => { overlayMaps[o.label] = overlayLayers[o.layer]; });

    const initial = [baseMaps[view.baseSurfaces[view.defaultBase].label]];
    view.overlays.filter((o) => o.visibleOnLoad).forEach((o) => initial.push(overlayLayers[o.layer]));

    const map = L.map('map', {
      center: [view.options.center.lat, view.options.center.lon],
      zoom: view.options.zoom,
      layers: initial,
      scrollWheelZoom: view.options.scrollWheelZoom
    });

    L.control.layers(baseMaps, overlayMaps, { collapsed: view.options.layerControlCollapsed }).addTo(map);

    const legend = L.control({ position: view.options.legendPosition });
    legend.onAdd = function () {
      const div = L.DomUtil.create('div', 'info legend');
      div.innerHTML = document.getElementById('legend').innerHTML;
      return div;
    };
    legend.addTo(map);

    const timeline = L.timeline({
      type: 'FeatureCollection',
      features: view.layers.timeline.markers.map((t) => ({
        type: 'Feature',
        properties: { start: t.interval.start, end: t.interval.end, marker: t.marker },
        geometry: { type: 'Point', coordinates: [t.marker.position.lon, t.marker.position.lat] }
      }))
    }, {
      getInterval: (f) => ({ start: f.properties.start, end: f.properties.end }),
      pointToLayer: (f) => marker(f.properties.marker)
    });

    const sliderOptions = {
      duration: view.timeSlider.durationMs,
      steps: view.timeSlider.steps,
      formatOutput: (date) => new Date(date).toString()
    };
    if (view.timeSlider.bounds) {
      sliderOptions.start = view.timeSlider.bounds.start;
      sliderOptions.end = view.timeSlider.bounds.end;
    }
    const slider = L.timelineSliderControl(sliderOptions);
    slider.addTo(map);
    slider.addTimelines(timeline);
    timeline.addTo(map);
  </script>
</body>
</html>
"#;

pub fn render_html(view: &MapView) -> Result<String, RenderError> {
    Ok(PAGE_TEMPLATE
        .replace("__LEGEND__", &legend_html(&view.legend))
        .replace("__MAP_VIEW__", &embedded_json(view)?))
}

pub fn render_error_html(message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>Map unavailable</title></head>\n<body>\n  <h1>Map unavailable</h1>\n  <p>{}</p>\n</body>\n</html>\n",
        escape_html(message)
    )
}

pub fn legend_html(entries: &[LegendEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                r#"<i style="background:{}"></i> {}<br>"#,
                entry.color.css_name(),
                escape_html(&entry.label)
            )
        })
        .collect()
}

/// JSON safe to drop inside a `<script>` element: `<` never appears literally.
fn embedded_json(view: &MapView) -> Result<String, RenderError> {
    let json = serde_json::to_string(view)?;
    Ok(json.replace('<', "\\u003c"))
}
