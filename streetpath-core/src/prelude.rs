pub use crate::{DEFAULT_ZOOM, SAMPLE_STREET_NAMES};

// Re-export key components
pub use crate::loading::{StreetGraphConfig, load_street_graph, street_graph_from_geojson};
pub use crate::model::{StreetEdge, StreetGraph, StreetGraphBuilder, StreetName, StreetNode};
pub use crate::render::{LeafletAssets, MapDocument, TileLayer, render_map};
pub use crate::routing::{
    NodePath, ResolvedPoint, StreetQuery, StreetRoute, apply_penalty, find_route, resolve_street,
    shortest_path, traced_names,
};

// Core types for the street network
pub use crate::Error;
pub use crate::Meters;
pub use crate::OsmNodeId;
