use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use super::{ResolvedPoint, StreetRoute};
use crate::{Error, StreetGraph};

impl StreetRoute {
    /// Converts the route to a `GeoJSON` `FeatureCollection`: the path
    /// following edge geometries, then the start and end nodes.
    pub fn to_geojson(&self, graph: &StreetGraph) -> Result<FeatureCollection, Error> {
        let line = self.path.to_detailed_line_string(graph);
        let geometry = Geometry::new(GeoJsonValue::from(&line));

        let value = json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "kind": "path",
                "length": self.path.weight(),
                "streets": self.streets,
                "nodes": self.path.node_ids(graph),
            }
        });
        let path_feature =
            Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))?;

        Ok(FeatureCollection {
            features: vec![
                path_feature,
                create_endpoint_feature(graph, &self.start, "start")?,
                create_endpoint_feature(graph, &self.end, "end")?,
            ],
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self, graph: &StreetGraph) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson(graph)?)
            .map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

fn create_endpoint_feature(
    graph: &StreetGraph,
    point: &ResolvedPoint,
    role: &str,
) -> Result<Feature, Error> {
    let node = graph.node(point.node).ok_or(Error::InvalidNodeIndex)?;
    let geometry = Geometry::new(GeoJsonValue::from(&node.geometry));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "kind": role,
            "query": point.query.as_str(),
            "osmid": node.id,
        }
    });

    Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}
