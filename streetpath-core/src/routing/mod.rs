//! Street resolution, edge penalties and shortest paths

pub mod dijkstra;
mod penalty;
mod query;
mod resolve;
mod route;
mod to_geojson;
mod trace;

pub use dijkstra::{NodePath, shortest_path};
pub use penalty::apply_penalty;
pub use query::StreetQuery;
pub use resolve::{ResolvedPoint, resolve_street};
pub use route::{StreetRoute, find_route};
pub use trace::traced_names;
