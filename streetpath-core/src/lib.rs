//! Street-name routing over a road network.
//!
//! Loads a road graph, resolves street names to graph nodes, computes
//! shortest paths (optionally after penalising a street) and renders the
//! network and the path as an interactive map.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod render;
pub mod routing;

pub use error::Error;
pub use loading::{StreetGraphConfig, load_street_graph};
pub use model::{StreetEdge, StreetGraph, StreetName, StreetNode};

/// OSM identifier of a graph node
pub type OsmNodeId = i64;

/// Edge length in meters, possibly scaled by a penalty
pub type Meters = f64;

/// How many street names are reported when a query matches nothing
pub const SAMPLE_STREET_NAMES: usize = 20;

/// Default zoom level of rendered maps
pub const DEFAULT_ZOOM: u8 = 15;
