use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use geo::{LineString, Point};
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use log::info;
use petgraph::visit::EdgeRef;

use super::html::render_html;
use super::{LeafletAssets, TileLayer};
use crate::routing::NodePath;
use crate::{DEFAULT_ZOOM, Error, StreetGraph};

/// Rendered map, ready to be written as HTML
#[derive(Debug, Clone)]
pub struct MapDocument {
    pub title: String,
    pub center: Point<f64>,
    pub zoom: u8,
    pub tiles: Option<TileLayer>,
    pub assets: LeafletAssets,
    /// One line per edge
    pub streets: FeatureCollection,
    /// One point per node
    pub nodes: FeatureCollection,
    /// Path line followed by its start and end points
    pub route: Option<FeatureCollection>,
}

/// Draws every edge and node of `graph`, the optional path on top, over
/// the optional tile layer.
pub fn render_map(
    graph: &StreetGraph,
    path: Option<&NodePath>,
    tiles: Option<&TileLayer>,
) -> MapDocument {
    let streets = collection(graph.edges().map(|edge| {
        let street = edge.weight();
        let mut feature = feature(GeoJsonValue::from(&street.geometry));
        if let Some(name) = &street.name {
            feature.set_property("name", name.to_string());
        }
        feature.set_property("length", street.length);
        feature
    }));

    let nodes = collection(graph.nodes().map(|node| {
        let mut feature = feature(GeoJsonValue::from(&node.geometry));
        feature.set_property("osmid", node.id);
        feature
    }));

    let route = path.map(|path| route_overlay(graph, path));

    // Centre on the middle of the path when there is one
    let center = path
        .and_then(|path| {
            let coords = path.coordinates(graph);
            coords.get(coords.len() / 2).copied().map(Point::from)
        })
        .or_else(|| graph.mean_location())
        .unwrap_or_else(|| Point::new(0.0, 0.0));

    MapDocument {
        title: if path.is_some() {
            "Shortest path".to_string()
        } else {
            "Street network".to_string()
        },
        center,
        zoom: DEFAULT_ZOOM,
        tiles: tiles.cloned(),
        assets: LeafletAssets::default(),
        streets,
        nodes,
        route,
    }
}

fn route_overlay(graph: &StreetGraph, path: &NodePath) -> FeatureCollection {
    let coords = path.coordinates(graph);
    let mut features = Vec::with_capacity(3);

    let mut line = feature(GeoJsonValue::from(&LineString::new(coords.clone())));
    line.set_property("kind", "path");
    line.set_property("length", path.weight());
    features.push(line);

    for (kind, coord) in [("start", coords.first()), ("end", coords.last())] {
        if let Some(&coord) = coord {
            let mut marker = feature(GeoJsonValue::from(&Point::from(coord)));
            marker.set_property("kind", kind);
            features.push(marker);
        }
    }

    collection(features)
}

fn feature(value: GeoJsonValue) -> Feature {
    Feature::from(Geometry::new(value))
}

fn collection(features: impl IntoIterator<Item = Feature>) -> FeatureCollection {
    FeatureCollection {
        features: features.into_iter().collect(),
        bbox: None,
        foreign_members: None,
    }
}

impl MapDocument {
    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_assets(mut self, assets: LeafletAssets) -> Self {
        self.assets = assets;
        self
    }

    /// # Errors
    ///
    /// Returns an error if a layer cannot be serialized
    pub fn to_html(&self) -> Result<String, Error> {
        render_html(self)
    }

    /// Writes the document as HTML, flushing before returning
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let html = self.to_html()?;
        let file = File::create(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to create map file '{}': {}", path.display(), e),
            )
        })?;
        let mut writer = BufWriter::new(file);
        writer.write_all(html.as_bytes())?;
        writer.flush()?;

        info!(
            "Map with {} streets and {} nodes saved to {}",
            self.streets.features.len(),
            self.nodes.features.len(),
            path.display()
        );
        Ok(())
    }
}
