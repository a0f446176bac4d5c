use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use log::debug;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use super::{NodePath, state::State};
use crate::{Error, Meters, StreetGraph};

/// Dijkstra's algorithm over edge lengths between two nodes of the street
/// network.
///
/// # Errors
///
/// Returns [`Error::NoPathExists`] if `end` cannot be reached from `start`,
/// or [`Error::InvalidNodeIndex`] if either node is not in the graph
pub fn shortest_path(
    graph: &StreetGraph,
    start: NodeIndex,
    end: NodeIndex,
) -> Result<NodePath, Error> {
    if graph.node(start).is_none() || graph.node(end).is_none() {
        return Err(Error::InvalidNodeIndex);
    }

    // Estimate capacity based on graph size (adjust as needed)
    let estimated_nodes = graph.node_count().min(1000);
    let mut distances: HashMap<NodeIndex, Meters> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(estimated_nodes);
    let mut settled = FixedBitSet::with_capacity(graph.node_count());
    let mut heap = BinaryHeap::with_capacity(estimated_nodes / 4);

    // Start node has distance 0
    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        if node == end {
            let path = reconstruct_path(&predecessors, start, end, cost);
            debug!(
                "Shortest path settled after {} nodes: {} nodes, {:.1} m",
                settled.count_ones(..),
                path.len(),
                path.weight()
            );
            return Ok(path);
        }

        // Stale heap entry, a shorter route already settled this node
        if settled.put(node.index()) {
            continue;
        }

        // Examine neighbors
        for edge in graph.graph.edges(node) {
            let next = edge.target();
            if settled.contains(next.index()) {
                continue;
            }
            let next_cost = cost + edge.weight().length;

            // Add or update distance if better using Entry API
            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, node);
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, node);
                    }
                }
            }
        }
    }

    Err(Error::NoPathExists {
        from: graph.osm_id(start)?,
        to: graph.osm_id(end)?,
    })
}

// Follow predecessors backward from end to start
fn reconstruct_path(
    predecessors: &HashMap<NodeIndex, NodeIndex>,
    start: NodeIndex,
    end: NodeIndex,
    weight: Meters,
) -> NodePath {
    let mut nodes = vec![end];
    let mut current = end;
    while current != start {
        match predecessors.get(&current) {
            Some(&prev) => {
                nodes.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    nodes.reverse(); // Now path is from start to end

    NodePath::new(nodes, weight)
}
