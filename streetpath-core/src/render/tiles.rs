use serde::{Deserialize, Serialize};

use crate::Error;

/// Raster base layer addressed by a `{z}/{x}/{y}` URL template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
    pub name: String,
}

impl TileLayer {
    /// Tiles served by a local tile server or read from a local cache
    ///
    /// # Errors
    ///
    /// Returns an error if the template lacks a `{z}`, `{x}` or `{y}`
    /// placeholder
    pub fn offline(url_template: &str) -> Result<Self, Error> {
        Self::new(url_template, "Offline Tiles", "Offline Map")
    }

    /// # Errors
    ///
    /// Returns an error if the template lacks a `{z}`, `{x}` or `{y}`
    /// placeholder
    pub fn new(url_template: &str, attribution: &str, name: &str) -> Result<Self, Error> {
        for placeholder in ["{z}", "{x}", "{y}"] {
            if !url_template.contains(placeholder) {
                return Err(Error::InvalidData(format!(
                    "Tile URL template '{url_template}' has no {placeholder} placeholder"
                )));
            }
        }
        Ok(Self {
            url_template: url_template.to_string(),
            attribution: attribution.to_string(),
            name: name.to_string(),
        })
    }

    pub fn openstreetmap() -> Self {
        Self {
            url_template: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; OpenStreetMap contributors".to_string(),
            name: "OpenStreetMap".to_string(),
        }
    }
}

/// Where the rendered page loads Leaflet from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafletAssets {
    pub css: String,
    pub js: String,
}

impl Default for LeafletAssets {
    fn default() -> Self {
        Self {
            css: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css".to_string(),
            js: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js".to_string(),
        }
    }
}
