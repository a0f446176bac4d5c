//! `GeoJSON` road network parsing
//!
//! Nodes are `Point` features identified by their `osmid` property (or the
//! feature id). Edges are features carrying `u` and `v` node ids, a
//! `length` in meters, an optional `key` and an optional `name` that is
//! either a string or a list of aliases.

use geo::{LineString, Point};
use geojson::{Feature, FeatureCollection, GeoJson, Value as GeoJsonValue, feature::Id};
use log::{debug, info};
use serde_json::Value as JsonValue;

use crate::model::StreetGraphBuilder;
use crate::{Error, OsmNodeId, StreetEdge, StreetGraph, StreetName};

/// Builds a street graph from the text of a `GeoJSON` feature collection
///
/// # Errors
///
/// Returns an error if the text is not a feature collection or a node or
/// edge feature is malformed
pub fn street_graph_from_geojson(source: &str) -> Result<StreetGraph, Error> {
    let geojson: GeoJson = source
        .parse()
        .map_err(|e: geojson::Error| Error::GeoJsonError(e.to_string()))?;
    let collection =
        FeatureCollection::try_from(geojson).map_err(|e| Error::GeoJsonError(e.to_string()))?;

    let mut builder = StreetGraphBuilder::new();
    let mut edge_features = Vec::new();
    let mut skipped = 0usize;

    // Nodes first, so edges can reference nodes listed after them
    for feature in collection.features {
        if is_edge(&feature) {
            edge_features.push(feature);
        } else if let Some((id, point)) = node_from_feature(&feature)? {
            builder.add_node(id, point)?;
        } else {
            skipped += 1;
        }
    }

    for feature in edge_features {
        let (source, target, edge) = edge_from_feature(&feature)?;
        builder.add_edge(source, target, edge)?;
    }

    if skipped > 0 {
        debug!("Skipped {skipped} features that are neither nodes nor edges");
    }

    let graph = builder.build();
    info!(
        "Built street graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn is_edge(feature: &Feature) -> bool {
    feature.contains_property("u") && feature.contains_property("v")
}

fn node_from_feature(feature: &Feature) -> Result<Option<(OsmNodeId, Point<f64>)>, Error> {
    let Some(GeoJsonValue::Point(_)) = feature.geometry.as_ref().map(|g| &g.value) else {
        return Ok(None);
    };
    let Some(geometry) = feature.geometry.clone() else {
        return Ok(None);
    };

    let id = feature
        .property("osmid")
        .and_then(osm_id)
        .or_else(|| match &feature.id {
            Some(Id::Number(number)) => number.as_i64(),
            Some(Id::String(text)) => text.parse().ok(),
            None => None,
        })
        .ok_or_else(|| Error::InvalidData("Node feature without an osmid".to_string()))?;

    let point = Point::try_from(geometry.value)
        .map_err(|e| Error::GeoJsonError(format!("Node {id}: {e}")))?;

    Ok(Some((id, point)))
}

fn edge_from_feature(feature: &Feature) -> Result<(OsmNodeId, OsmNodeId, StreetEdge), Error> {
    let source = required_id(feature, "u")?;
    let target = required_id(feature, "v")?;

    let key = match feature.property("key") {
        None | Some(JsonValue::Null) => 0,
        Some(value) => value
            .as_u64()
            .and_then(|key| u32::try_from(key).ok())
            .ok_or_else(|| {
                Error::InvalidData(format!("Edge {source} -> {target} has invalid key {value}"))
            })?,
    };

    let length = feature
        .property("length")
        .and_then(JsonValue::as_f64)
        .ok_or_else(|| Error::InvalidData(format!("Edge {source} -> {target} has no length")))?;

    let name = match feature.property("name") {
        None | Some(JsonValue::Null) => None,
        Some(value) => Some(
            serde_json::from_value::<StreetName>(value.clone()).map_err(|e| {
                Error::InvalidData(format!("Edge {source} -> {target} has invalid name: {e}"))
            })?,
        ),
    };

    let geometry = match feature.geometry.clone() {
        Some(geometry) if matches!(geometry.value, GeoJsonValue::LineString(_)) => {
            LineString::try_from(geometry.value)
                .map_err(|e| Error::GeoJsonError(format!("Edge {source} -> {target}: {e}")))?
        }
        _ => LineString::new(vec![]),
    };

    Ok((
        source,
        target,
        StreetEdge {
            key,
            length,
            name,
            geometry,
        },
    ))
}

fn required_id(feature: &Feature, property: &str) -> Result<OsmNodeId, Error> {
    feature
        .property(property)
        .and_then(osm_id)
        .ok_or_else(|| Error::InvalidData(format!("Edge has invalid `{property}` node id")))
}

// Some exports write ids as strings
fn osm_id(value: &JsonValue) -> Option<OsmNodeId> {
    value
        .as_i64()
        .or_else(|| value.as_str().and_then(|text| text.parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_NETWORK: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [0.5, 0.1], [1.0, 0.0]]},
             "properties": {"u": 1, "v": 2, "key": 0, "length": 120.5, "name": ["Avenue Al Markeb", "Route de Targa"]}},
            {"type": "Feature", "geometry": null,
             "properties": {"u": 2, "v": 3, "length": 40.0, "name": null}},
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}, "properties": {"osmid": 1}},
            {"type": "Feature", "id": 2, "geometry": {"type": "Point", "coordinates": [1.0, 0.0]}, "properties": {}},
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [1.0, 1.0]}, "properties": {"osmid": "3"}},
            {"type": "Feature", "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]}, "properties": {}}
        ]
    }"#;

    #[test]
    fn parses_nodes_and_edges_in_any_order() {
        let graph = street_graph_from_geojson(SMALL_NETWORK).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);

        let first = graph.edges().next().unwrap();
        assert_eq!(first.weight().length, 120.5);
        assert_eq!(first.weight().geometry.0.len(), 3);
        assert_eq!(
            first.weight().names(),
            ["Avenue Al Markeb", "Route de Targa"]
        );
    }

    #[test]
    fn edge_without_geometry_or_name_gets_defaults() {
        let graph = street_graph_from_geojson(SMALL_NETWORK).unwrap();
        let second = graph.edges().nth(1).unwrap();
        assert_eq!(second.weight().key, 0);
        assert!(second.weight().name.is_none());
        assert_eq!(second.weight().geometry.0.len(), 2);
    }

    #[test]
    fn rejects_edges_to_unknown_nodes() {
        let source = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}, "properties": {"osmid": 1}},
            {"type": "Feature", "geometry": null, "properties": {"u": 1, "v": 7, "length": 3.0}}
        ]}"#;
        assert!(matches!(
            street_graph_from_geojson(source),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn rejects_edges_without_length() {
        let source = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}, "properties": {"osmid": 1}},
            {"type": "Feature", "geometry": null, "properties": {"u": 1, "v": 1}}
        ]}"#;
        assert!(matches!(
            street_graph_from_geojson(source),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn rejects_non_collections() {
        let source = r#"{"type": "Point", "coordinates": [0.0, 0.0]}"#;
        assert!(matches!(
            street_graph_from_geojson(source),
            Err(Error::GeoJsonError(_))
        ));
    }
}
