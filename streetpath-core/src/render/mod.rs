//! Interactive map rendering
//!
//! Maps are standalone HTML documents driven by Leaflet. Every layer is
//! embedded as `GeoJSON`, and the base layer comes from a tile URL template
//! which may point to a local tile server for offline use.

mod html;
mod map;
mod tiles;

pub use map::{MapDocument, render_map};
pub use tiles::{LeafletAssets, TileLayer};
