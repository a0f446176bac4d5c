//! Road network model

pub mod components;
pub mod name;
pub mod network;

pub use components::{StreetEdge, StreetNode};
pub use name::StreetName;
pub use network::{IndexedPoint, StreetGraph, StreetGraphBuilder};
