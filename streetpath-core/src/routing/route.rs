use log::info;

use super::{NodePath, ResolvedPoint, StreetQuery, resolve_street, shortest_path, traced_names};
use crate::{Error, StreetGraph};

/// Shortest path between two streets, with the streets it traverses
#[derive(Debug, Clone)]
pub struct StreetRoute {
    pub start: ResolvedPoint,
    pub end: ResolvedPoint,
    pub path: NodePath,
    pub streets: Vec<String>,
}

/// Resolves both queries and computes the shortest path between them.
///
/// # Errors
///
/// Returns [`Error::StreetNotFound`] if either query matches no edge, or
/// [`Error::NoPathExists`] if the resolved nodes are not connected
pub fn find_route(
    graph: &StreetGraph,
    from: &StreetQuery,
    to: &StreetQuery,
) -> Result<StreetRoute, Error> {
    let start = resolve_street(graph, from)?;
    let end = resolve_street(graph, to)?;

    info!(
        "Routing from \"{from}\" (node {}) to \"{to}\" (node {})",
        graph.osm_id(start.node)?,
        graph.osm_id(end.node)?
    );

    let path = shortest_path(graph, start.node, end.node)?;
    let streets = traced_names(graph, &path);

    info!(
        "Found path through {} nodes and {} streets, {:.1} m",
        path.len(),
        streets.len(),
        path.weight()
    );

    Ok(StreetRoute {
        start,
        end,
        path,
        streets,
    })
}
