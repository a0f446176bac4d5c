//! File configuration, merged with command-line flags.
//!
//! Flags take precedence over `streetpath.toml`, which takes precedence
//! over built-in defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use streetpath_core::prelude::*;

use crate::args::{MapArgs, RouteArgs, TileArgs};
use crate::error::AppError;

const DEFAULT_CONFIG_FILE: &str = "streetpath.toml";
const DEFAULT_ROUTE_OUTPUT: &str = "map_with_path.html";
const DEFAULT_MAP_OUTPUT: &str = "map.html";
const DEFAULT_PENALTY_FACTOR: f64 = 3.0;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub graph: Option<PathBuf>,
    pub route: RouteConfig,
    pub penalty: Option<PenaltyConfig>,
    pub tiles: TilesConfig,
    pub map: MapConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouteConfig {
    pub from: Option<String>,
    pub to: Option<String>,
    pub output: Option<PathBuf>,
    pub geojson: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PenaltyConfig {
    pub street: String,
    #[serde(default = "default_penalty_factor")]
    pub factor: f64,
}

fn default_penalty_factor() -> f64 {
    DEFAULT_PENALTY_FACTOR
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TilesConfig {
    pub enabled: bool,
    pub url: Option<String>,
    pub attribution: Option<String>,
    pub name: Option<String>,
}

impl Default for TilesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: None,
            attribution: None,
            name: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    pub output: Option<PathBuf>,
    pub zoom: Option<u8>,
    pub leaflet_css: Option<String>,
    pub leaflet_js: Option<String>,
}

/// Everything the `route` command needs
#[derive(Debug)]
pub struct RouteSettings {
    pub graph: PathBuf,
    pub from: StreetQuery,
    pub to: StreetQuery,
    pub penalty: Option<(StreetQuery, f64)>,
    pub render: RenderSettings,
    pub geojson: Option<PathBuf>,
}

/// Everything the `map` command needs
#[derive(Debug)]
pub struct MapSettings {
    pub graph: PathBuf,
    pub render: RenderSettings,
}

#[derive(Debug)]
pub struct RenderSettings {
    pub tiles: Option<TileLayer>,
    pub output: PathBuf,
    pub zoom: u8,
    pub assets: LeafletAssets,
}

impl AppConfig {
    /// Reads the given file, or `streetpath.toml` from the working directory
    /// if it exists, or falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }

    fn from_file(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn graph_path(&self, flag: Option<&Path>) -> Result<PathBuf, AppError> {
        flag.map(Path::to_path_buf)
            .or_else(|| self.graph.clone())
            .ok_or_else(|| AppError::Missing("road network file (--graph or `graph`)".to_string()))
    }

    pub fn route_settings(
        &self,
        graph: Option<&Path>,
        args: &RouteArgs,
    ) -> Result<RouteSettings, AppError> {
        let from = pick(args.from.as_ref(), self.route.from.as_ref())
            .ok_or_else(|| AppError::Missing("start street (--from or `route.from`)".to_string()))?;
        let to = pick(args.to.as_ref(), self.route.to.as_ref())
            .ok_or_else(|| AppError::Missing("end street (--to or `route.to`)".to_string()))?;

        let penalty = match (&args.avoid, &self.penalty) {
            (Some(street), _) => Some((
                StreetQuery::new(street)?,
                args.penalty.unwrap_or(DEFAULT_PENALTY_FACTOR),
            )),
            (None, Some(config)) => Some((StreetQuery::new(&config.street)?, config.factor)),
            (None, None) => None,
        };

        Ok(RouteSettings {
            graph: self.graph_path(graph)?,
            from: StreetQuery::new(&from)?,
            to: StreetQuery::new(&to)?,
            penalty,
            render: self.render_settings(
                &args.tiles,
                args.output.as_ref(),
                self.route.output.as_ref(),
                DEFAULT_ROUTE_OUTPUT,
            )?,
            geojson: pick(args.geojson.as_ref(), self.route.geojson.as_ref()),
        })
    }

    pub fn map_settings(&self, graph: Option<&Path>, args: &MapArgs) -> Result<MapSettings, AppError> {
        Ok(MapSettings {
            graph: self.graph_path(graph)?,
            render: self.render_settings(
                &args.tiles,
                args.output.as_ref(),
                self.map.output.as_ref(),
                DEFAULT_MAP_OUTPUT,
            )?,
        })
    }

    fn render_settings(
        &self,
        tiles: &TileArgs,
        output_flag: Option<&PathBuf>,
        output_config: Option<&PathBuf>,
        default_output: &str,
    ) -> Result<RenderSettings, AppError> {
        let defaults = LeafletAssets::default();
        Ok(RenderSettings {
            tiles: self.tile_layer(tiles)?,
            output: pick(output_flag, output_config).unwrap_or_else(|| default_output.into()),
            zoom: self.map.zoom.unwrap_or(DEFAULT_ZOOM),
            assets: LeafletAssets {
                css: self.map.leaflet_css.clone().unwrap_or(defaults.css),
                js: self.map.leaflet_js.clone().unwrap_or(defaults.js),
            },
        })
    }

    fn tile_layer(&self, args: &TileArgs) -> Result<Option<TileLayer>, AppError> {
        if args.no_tiles {
            return Ok(None);
        }
        let mut layer = match (&args.tiles, &self.tiles.url) {
            (Some(url), _) => TileLayer::offline(url)?,
            (None, _) if !self.tiles.enabled => return Ok(None),
            (None, Some(url)) => TileLayer::offline(url)?,
            (None, None) => TileLayer::openstreetmap(),
        };
        if let Some(attribution) = &self.tiles.attribution {
            layer.attribution.clone_from(attribution);
        }
        if let Some(name) = &self.tiles.name {
            layer.name.clone_from(name);
        }
        Ok(Some(layer))
    }
}

fn pick<T: Clone>(flag: Option<&T>, config: Option<&T>) -> Option<T> {
    flag.or(config).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
graph = "ALLmarrakesh.geojson"

[route]
from = "Avenue Al Markeb"
to = "Avenue Antaki"
output = "zoommap_augmented_path.html"

[penalty]
street = "Rue El Cadi Ayad"
factor = 3

[tiles]
url = "http://localhost:8000/{z}/{x}/{y}.png"

[map]
zoom = 16
"#;

    fn sample() -> AppConfig {
        toml::from_str(SAMPLE).unwrap()
    }

    #[test]
    fn file_settings_apply_without_flags() {
        let settings = sample()
            .route_settings(None, &RouteArgs::default())
            .unwrap();

        assert_eq!(settings.graph, PathBuf::from("ALLmarrakesh.geojson"));
        assert_eq!(settings.from.as_str(), "Avenue Al Markeb");
        assert_eq!(settings.to.as_str(), "Avenue Antaki");
        let (street, factor) = settings.penalty.unwrap();
        assert_eq!(street.as_str(), "Rue El Cadi Ayad");
        assert_eq!(factor, 3.0);
        assert_eq!(
            settings.render.output,
            PathBuf::from("zoommap_augmented_path.html")
        );
        assert_eq!(settings.render.zoom, 16);
        let tiles = settings.render.tiles.unwrap();
        assert_eq!(tiles.url_template, "http://localhost:8000/{z}/{x}/{y}.png");
        assert_eq!(tiles.name, "Offline Map");
    }

    #[test]
    fn flags_override_file() {
        let args = RouteArgs {
            from: Some("Avenue Antaki".to_string()),
            avoid: Some("Avenue Al Markeb".to_string()),
            penalty: Some(10.0),
            tiles: TileArgs {
                tiles: None,
                no_tiles: true,
            },
            output: Some(PathBuf::from("out.html")),
            ..RouteArgs::default()
        };
        let settings = sample()
            .route_settings(Some(Path::new("other.geojson")), &args)
            .unwrap();

        assert_eq!(settings.graph, PathBuf::from("other.geojson"));
        assert_eq!(settings.from.as_str(), "Avenue Antaki");
        let (street, factor) = settings.penalty.unwrap();
        assert_eq!(street.as_str(), "Avenue Al Markeb");
        assert_eq!(factor, 10.0);
        assert!(settings.render.tiles.is_none());
        assert_eq!(settings.render.output, PathBuf::from("out.html"));
    }

    #[test]
    fn defaults_without_file() {
        let args = RouteArgs {
            from: Some("a".to_string()),
            to: Some("b".to_string()),
            avoid: Some("c".to_string()),
            ..RouteArgs::default()
        };
        let settings = AppConfig::default()
            .route_settings(Some(Path::new("g.geojson")), &args)
            .unwrap();

        assert_eq!(settings.penalty.unwrap().1, DEFAULT_PENALTY_FACTOR);
        assert_eq!(settings.render.output, PathBuf::from(DEFAULT_ROUTE_OUTPUT));
        assert_eq!(settings.render.zoom, DEFAULT_ZOOM);
        assert_eq!(settings.render.tiles, Some(TileLayer::openstreetmap()));
        assert!(settings.geojson.is_none());
    }

    #[test]
    fn missing_street_or_graph_is_reported() {
        let config = AppConfig::default();
        assert!(matches!(
            config.route_settings(Some(Path::new("g.geojson")), &RouteArgs::default()),
            Err(AppError::Missing(_))
        ));
        assert!(matches!(
            config.map_settings(None, &MapArgs::default()),
            Err(AppError::Missing(_))
        ));
    }

    #[test]
    fn disabled_tiles_in_file() {
        let config: AppConfig = toml::from_str("[tiles]\nenabled = false\n").unwrap();
        let settings = config
            .map_settings(Some(Path::new("g.geojson")), &MapArgs::default())
            .unwrap();
        assert!(settings.render.tiles.is_none());
        assert_eq!(settings.render.output, PathBuf::from(DEFAULT_MAP_OUTPUT));
    }

    #[test]
    fn file_tile_labels_apply_to_flag_url() {
        let config: AppConfig = toml::from_str(
            "[tiles]\nattribution = \"Local cache\"\nname = \"Marrakesh\"\n",
        )
        .unwrap();
        let args = MapArgs {
            tiles: TileArgs {
                tiles: Some("http://localhost:8000/{z}/{x}/{y}.png".to_string()),
                no_tiles: false,
            },
            output: None,
        };
        let tiles = config
            .map_settings(Some(Path::new("g.geojson")), &args)
            .unwrap()
            .render
            .tiles
            .unwrap();

        assert_eq!(tiles.url_template, "http://localhost:8000/{z}/{x}/{y}.png");
        assert_eq!(tiles.attribution, "Local cache");
        assert_eq!(tiles.name, "Marrakesh");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<AppConfig>("grahp = \"typo.geojson\"").is_err());
    }

    #[test]
    fn reads_config_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("streetpath.toml");
        std::fs::write(&path, SAMPLE).unwrap();
        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.map.zoom, Some(16));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "graph = ").unwrap();
        assert!(matches!(
            AppConfig::load(Some(&broken)),
            Err(AppError::ConfigParse { .. })
        ));
    }
}
