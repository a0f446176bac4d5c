use std::path::PathBuf;

/// Where to find the road network and how to read it
#[derive(Debug, Clone)]
pub struct StreetGraphConfig {
    /// Path to a `GeoJSON` feature collection of nodes and edges
    pub graph_path: PathBuf,
}

impl StreetGraphConfig {
    pub fn new(graph_path: impl Into<PathBuf>) -> Self {
        Self {
            graph_path: graph_path.into(),
        }
    }
}
