//! This module is responsible for loading a road network from disk
//! and building the street graph used for routing.

mod builder;
mod config;
mod feature_collection;

pub use builder::load_street_graph;
pub use config::StreetGraphConfig;
pub use feature_collection::street_graph_from_geojson;
