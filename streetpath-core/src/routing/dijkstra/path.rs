use geo::{Coord, LineString};
use petgraph::graph::{EdgeReference, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::{Error, Meters, OsmNodeId, StreetEdge, StreetGraph};

/// Walk through the street graph.
///
/// Consecutive nodes are always connected by an edge and never repeat.
#[derive(Debug, Clone, PartialEq)]
pub struct NodePath {
    nodes: Vec<NodeIndex>,
    weight: Meters,
}

impl NodePath {
    pub(super) fn new(nodes: Vec<NodeIndex>, weight: Meters) -> Self {
        Self { nodes, weight }
    }

    /// Builds a path from a node sequence, checking that it is a walk in
    /// `graph`. The weight is the sum of the connecting edges' lengths.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence is empty, references unknown nodes,
    /// repeats a node back to back or uses a missing edge
    pub fn from_nodes(graph: &StreetGraph, nodes: Vec<NodeIndex>) -> Result<Self, Error> {
        let Some(&first) = nodes.first() else {
            return Err(Error::InvalidData("Path must contain a node".to_string()));
        };
        graph.node(first).ok_or(Error::InvalidNodeIndex)?;

        let mut weight = 0.0;
        for pair in nodes.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            graph.node(to).ok_or(Error::InvalidNodeIndex)?;
            if from == to {
                return Err(Error::InvalidData(format!(
                    "Path repeats node {} back to back",
                    graph.osm_id(from)?
                )));
            }
            let edge = graph.connecting_edge(from, to).ok_or_else(|| {
                Error::InvalidData(format!(
                    "No edge from node {} to node {}",
                    graph.osm_id(from).unwrap_or_default(),
                    graph.osm_id(to).unwrap_or_default()
                ))
            })?;
            weight += edge.weight().length;
        }

        Ok(Self { nodes, weight })
    }

    pub fn nodes(&self) -> &[NodeIndex] {
        &self.nodes
    }

    /// Total length of the traversed edges, including penalties
    pub fn weight(&self) -> Meters {
        self.weight
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start(&self) -> NodeIndex {
        self.nodes[0]
    }

    pub fn end(&self) -> NodeIndex {
        self.nodes[self.nodes.len() - 1]
    }

    /// Edges travelled between consecutive nodes
    pub fn edges<'a>(
        &'a self,
        graph: &'a StreetGraph,
    ) -> impl Iterator<Item = EdgeReference<'a, StreetEdge>> + 'a {
        self.nodes
            .windows(2)
            .filter_map(move |pair| graph.connecting_edge(pair[0], pair[1]))
    }

    pub fn node_ids(&self, graph: &StreetGraph) -> Vec<OsmNodeId> {
        self.nodes
            .iter()
            .filter_map(|&index| graph.node(index).map(|node| node.id))
            .collect()
    }

    /// Node coordinates along the path
    pub fn coordinates(&self, graph: &StreetGraph) -> Vec<Coord<f64>> {
        self.nodes
            .iter()
            .filter_map(|&index| graph.node(index).map(|node| node.geometry.0))
            .collect()
    }

    /// Path as a line through its nodes
    pub fn to_line_string(&self, graph: &StreetGraph) -> LineString<f64> {
        LineString::new(self.coordinates(graph))
    }

    /// Path following the geometry of every traversed edge
    pub fn to_detailed_line_string(&self, graph: &StreetGraph) -> LineString<f64> {
        let mut coords: Vec<Coord<f64>> = Vec::new();
        for edge in self.edges(graph) {
            let geometry = &edge.weight().geometry.0;
            // Consecutive edges share their joining point
            let skip = usize::from(!coords.is_empty());
            coords.extend(geometry.iter().skip(skip));
        }
        if coords.is_empty() {
            coords = self.coordinates(graph);
        }
        LineString::new(coords)
    }
}
