use itertools::Itertools;
use petgraph::visit::EdgeRef;

use super::NodePath;
use crate::{StreetEdge, StreetGraph};

/// Street names along a path, in travel order, each reported once at its
/// first occurrence. Aliases are flattened and unnamed edges skipped.
pub fn traced_names(graph: &StreetGraph, path: &NodePath) -> Vec<String> {
    path.edges(graph)
        .flat_map(|edge| StreetEdge::names(edge.weight()))
        .unique()
        .cloned()
        .collect()
}
