use geo::Point;
use log::debug;
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use super::StreetQuery;
use crate::{Error, SAMPLE_STREET_NAMES, StreetGraph};

/// Graph node standing in for a street, used as a path endpoint
#[derive(Debug, Clone)]
pub struct ResolvedPoint {
    pub query: StreetQuery,
    /// First edge, in insertion order, whose name matched
    pub edge: EdgeIndex,
    /// Midpoint of the matched edge by arc length
    pub location: Point<f64>,
    /// Graph node nearest to `location`
    pub node: NodeIndex,
}

/// Resolves a street query to a graph node.
///
/// # Errors
///
/// Returns [`Error::StreetNotFound`] with sample street names when no edge
/// matches the query
pub fn resolve_street(graph: &StreetGraph, query: &StreetQuery) -> Result<ResolvedPoint, Error> {
    let Some(matched) = graph
        .edges()
        .find(|edge| query.matches_edge(edge.weight()))
    else {
        return Err(Error::StreetNotFound {
            query: query.to_string(),
            samples: graph.sample_street_names(SAMPLE_STREET_NAMES),
        });
    };

    let location = matched
        .weight()
        .point_at_fraction(0.5)
        .ok_or_else(|| Error::InvalidData(format!("Edge {:?} has no geometry", matched.id())))?;
    let node = graph.nearest_node(&location).ok_or(Error::NoPointsFound)?;

    debug!(
        "Resolved \"{query}\" to edge {:?} ({}), snapped to node {}",
        matched.id(),
        matched.weight().names().join(", "),
        graph.osm_id(node)?
    );

    Ok(ResolvedPoint {
        query: query.clone(),
        edge: matched.id(),
        location,
        node,
    })
}
