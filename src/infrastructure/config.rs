use serde::Deserialize;

const DEFAULT_EARTHQUAKES_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_day.geojson";
const DEFAULT_FAULT_LINES_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";
const DEFAULT_TILE_TEMPLATE: &str =
    "https://api.mapbox.com/styles/v1/mapbox/${style}/tiles/256/{z}/{x}/{y}?access_token=${token}";

const ENV_PREFIX: &str = "QUAKE_MAP";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub feeds: FeedsConfig,
    pub tiles: TilesConfig,
    pub map: MapSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FeedsConfig {
    pub earthquakes_url: String,
    pub fault_lines_url: String,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            earthquakes_url: DEFAULT_EARTHQUAKES_URL.to_string(),
            fault_lines_url: DEFAULT_FAULT_LINES_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TilesConfig {
    /// `${style}` and `${token}` are substituted; `{z}/{x}/{y}` are left for the map.
    pub url_template: String,
    pub access_token: String,
    pub styles: Vec<TileStyleConfig>,
}

impl Default for TilesConfig {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_TILE_TEMPLATE.to_string(),
            access_token: String::new(),
            styles: vec![
                TileStyleConfig::new("Outdoors", "outdoors-v10"),
                TileStyleConfig::new("Satellite", "satellite-v9"),
                TileStyleConfig::new("Dark Map", "dark-v9"),
            ],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TileStyleConfig {
    pub label: String,
    pub style_id: String,
}

impl TileStyleConfig {
    pub fn new(label: &str, style_id: &str) -> Self {
        Self {
            label: label.to_string(),
            style_id: style_id.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MapSettings {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
    pub scroll_wheel_zoom: bool,
    pub layer_control_collapsed: bool,
    pub legend_position: String,
    pub slider_duration_ms: u64,
    pub slider_steps: u32,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center_lat: 39.8283,
            center_lon: -98.5785,
            zoom: 3,
            scroll_wheel_zoom: false,
            layer_control_collapsed: true,
            legend_position: "bottomright".to_string(),
            slider_duration_ms: 10_000,
            slider_steps: 1000,
        }
    }
}

/// Loads `config/map.toml` if present, then `QUAKE_MAP__*` environment overrides.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/map").required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
pub fn parse_app_config(toml: &str) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Fill a tile template for one style.
pub fn tile_url(template: &str, style_id: &str, access_token: &str) -> String {
    template
        .replace("${style}", style_id)
        .replace("${token}", &urlencoding::encode(access_token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_url() {
        let url = tile_url(DEFAULT_TILE_TEMPLATE, "dark-v9", "pk.abc/def");

        assert_eq!(
            url,
            "https://api.mapbox.com/styles/v1/mapbox/dark-v9/tiles/256/{z}/{x}/{y}?access_token=pk.abc%2Fdef"
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_app_config("").unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.feeds.earthquakes_url, DEFAULT_EARTHQUAKES_URL);
        assert_eq!(config.tiles.styles.len(), 3);
        assert_eq!(config.tiles.styles[0], TileStyleConfig::new("Outdoors", "outdoors-v10"));
        assert_eq!(config.map.zoom, 3);
        assert!(!config.map.scroll_wheel_zoom);
    }

    #[test]
    fn test_partial_override() {
        let toml = r#"
            [server]
            port = 9000

            [tiles]
            access_token = "secret"
            styles = [{ label = "Light", style_id = "light-v10" }]

            [map]
            zoom = 5
        "#;
        let config = parse_app_config(toml).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.tiles.access_token, "secret");
        assert_eq!(config.tiles.styles, vec![TileStyleConfig::new("Light", "light-v10")]);
        assert_eq!(config.tiles.url_template, DEFAULT_TILE_TEMPLATE);
        assert_eq!(config.map.zoom, 5);
        assert_eq!(config.map.legend_position, "bottomright");
    }
}
