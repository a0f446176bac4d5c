//! Road network graph with a spatial index over its nodes

use geo::{LineString, Point};
use hashbrown::HashMap;
use itertools::Itertools;
use petgraph::graph::{DiGraph, EdgeIndex, EdgeReference, NodeIndex};
use petgraph::visit::EdgeRef;
use rstar::{RTree, primitives::GeomWithData};

use super::{StreetEdge, StreetNode};
use crate::{Error, OsmNodeId};

/// Node location paired with its graph index, stored in the R-tree
pub type IndexedPoint = GeomWithData<Point<f64>, NodeIndex>;

/// Directed road multigraph.
///
/// Edge indices follow insertion order, so iterating edges is reproducible
/// for a given input file.
#[derive(Debug)]
pub struct StreetGraph {
    pub(crate) graph: DiGraph<StreetNode, StreetEdge>,
    rtree: RTree<IndexedPoint>,
    node_lookup: HashMap<OsmNodeId, NodeIndex>,
}

impl StreetGraph {
    pub fn graph(&self) -> &DiGraph<StreetNode, StreetEdge> {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn node(&self, index: NodeIndex) -> Option<&StreetNode> {
        self.graph.node_weight(index)
    }

    pub fn edge(&self, index: EdgeIndex) -> Option<&StreetEdge> {
        self.graph.edge_weight(index)
    }

    pub fn node_index(&self, id: OsmNodeId) -> Option<NodeIndex> {
        self.node_lookup.get(&id).copied()
    }

    /// OSM id of a node, for reporting
    pub fn osm_id(&self, index: NodeIndex) -> Result<OsmNodeId, Error> {
        self.node(index)
            .map(|node| node.id)
            .ok_or(Error::InvalidNodeIndex)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &StreetNode> {
        self.graph.node_weights()
    }

    /// All edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = EdgeReference<'_, StreetEdge>> {
        self.graph.edge_references()
    }

    /// Nearest node to `point`, planar distance in lon/lat
    pub fn nearest_node(&self, point: &Point<f64>) -> Option<NodeIndex> {
        self.rtree.nearest_neighbor(point).map(|indexed| indexed.data)
    }

    /// Edge used to travel from `source` to `target`.
    ///
    /// Among parallel edges the shortest wins, then the lowest key, then the
    /// earliest inserted.
    pub fn connecting_edge(
        &self,
        source: NodeIndex,
        target: NodeIndex,
    ) -> Option<EdgeReference<'_, StreetEdge>> {
        self.graph.edges_connecting(source, target).min_by(|a, b| {
            a.weight()
                .length
                .total_cmp(&b.weight().length)
                .then(a.weight().key.cmp(&b.weight().key))
                .then(a.id().cmp(&b.id()))
        })
    }

    /// Every distinct street name, aliases flattened, sorted
    pub fn street_names(&self) -> Vec<String> {
        self.graph
            .edge_weights()
            .flat_map(StreetEdge::names)
            .sorted()
            .dedup()
            .cloned()
            .collect()
    }

    /// First `limit` distinct street names in edge order
    pub fn sample_street_names(&self, limit: usize) -> Vec<String> {
        self.graph
            .edge_weights()
            .flat_map(StreetEdge::names)
            .unique()
            .take(limit)
            .cloned()
            .collect()
    }

    /// Mean of all node coordinates, `None` for an empty graph
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_location(&self) -> Option<Point<f64>> {
        let count = self.graph.node_count();
        if count == 0 {
            return None;
        }
        let (sum_x, sum_y) = self
            .nodes()
            .fold((0.0, 0.0), |(x, y), node| {
                (x + node.geometry.x(), y + node.geometry.y())
            });
        Some(Point::new(sum_x / count as f64, sum_y / count as f64))
    }
}

/// Incrementally assembles a [`StreetGraph`] from nodes and edges keyed by
/// OSM id.
#[derive(Debug, Default)]
pub struct StreetGraphBuilder {
    graph: DiGraph<StreetNode, StreetEdge>,
    node_lookup: HashMap<OsmNodeId, NodeIndex>,
}

impl StreetGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node
    ///
    /// # Errors
    ///
    /// Returns an error if a node with the same id was already added
    pub fn add_node(&mut self, id: OsmNodeId, geometry: Point<f64>) -> Result<NodeIndex, Error> {
        if self.node_lookup.contains_key(&id) {
            return Err(Error::InvalidData(format!("Duplicate node id {id}")));
        }
        let index = self.graph.add_node(StreetNode { id, geometry });
        self.node_lookup.insert(id, index);
        Ok(index)
    }

    /// Adds a directed edge from `source` to `target`.
    ///
    /// An edge geometry with fewer than two points is replaced by the straight
    /// line between both nodes.
    ///
    /// # Errors
    ///
    /// Returns an error if either node is unknown or the length is negative
    /// or not finite
    pub fn add_edge(
        &mut self,
        source: OsmNodeId,
        target: OsmNodeId,
        mut edge: StreetEdge,
    ) -> Result<EdgeIndex, Error> {
        let source_index = self.lookup(source)?;
        let target_index = self.lookup(target)?;

        if !edge.length.is_finite() || edge.length < 0.0 {
            return Err(Error::InvalidData(format!(
                "Edge {source} -> {target} has invalid length {}",
                edge.length
            )));
        }

        if edge.geometry.0.len() < 2 {
            edge.geometry = LineString::from(vec![
                self.graph[source_index].geometry.0,
                self.graph[target_index].geometry.0,
            ]);
        }

        Ok(self.graph.add_edge(source_index, target_index, edge))
    }

    fn lookup(&self, id: OsmNodeId) -> Result<NodeIndex, Error> {
        self.node_lookup
            .get(&id)
            .copied()
            .ok_or_else(|| Error::InvalidData(format!("Edge references unknown node {id}")))
    }

    pub fn build(self) -> StreetGraph {
        let points = self
            .graph
            .node_indices()
            .map(|index| GeomWithData::new(self.graph[index].geometry, index))
            .collect();

        StreetGraph {
            rtree: RTree::bulk_load(points),
            graph: self.graph,
            node_lookup: self.node_lookup,
        }
    }
}
