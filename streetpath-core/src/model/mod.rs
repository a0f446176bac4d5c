//! Data model for street-name routing
//!
//! Contains types and structures for representing a road network.

pub mod streets;

pub use streets::{IndexedPoint, StreetEdge, StreetGraph, StreetGraphBuilder, StreetName, StreetNode};
