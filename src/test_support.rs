use std::path::PathBuf;

use tempfile::TempDir;

/// Four nodes along a line. Main Street (1→2) and Station Road (3→4) are
/// bent so their midpoints snap to nodes 1 and 4. A longer Station Road
/// segment (2→4) bypasses Park Avenue.
const NETWORK: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}, "properties": {"osmid": 1}},
    {"type": "Feature", "geometry": {"type": "Point", "coordinates": [0.001, 0.0]}, "properties": {"osmid": 2}},
    {"type": "Feature", "geometry": {"type": "Point", "coordinates": [0.002, 0.0]}, "properties": {"osmid": 3}},
    {"type": "Feature", "geometry": {"type": "Point", "coordinates": [0.003, 0.0]}, "properties": {"osmid": 4}},
    {"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [0.0, 0.0008], [0.001, 0.0]]},
     "properties": {"u": 1, "v": 2, "key": 0, "length": 100.0, "name": "Main Street"}},
    {"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[0.001, 0.0], [0.002, 0.0]]},
     "properties": {"u": 2, "v": 3, "key": 0, "length": 100.0, "name": "Park Avenue"}},
    {"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[0.002, 0.0], [0.003, 0.0008], [0.003, 0.0]]},
     "properties": {"u": 3, "v": 4, "key": 0, "length": 100.0, "name": "Station Road"}},
    {"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[0.001, 0.0], [0.003, 0.0]]},
     "properties": {"u": 2, "v": 4, "key": 0, "length": 350.0, "name": "Station Road"}}
  ]
}"#;

/// Writes the sample network into a fresh directory, returning both so the
/// directory outlives the test body
pub fn write_network() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("network.geojson");
    std::fs::write(&path, NETWORK).unwrap();
    (dir, path)
}
