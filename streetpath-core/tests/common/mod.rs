#![allow(dead_code)]

use geo::{LineString, Point, line_string};
use streetpath_core::prelude::*;

fn edge(length: f64, name: &str, geometry: LineString<f64>) -> StreetEdge {
    StreetEdge {
        key: 0,
        length,
        name: Some(StreetName::from(name)),
        geometry,
    }
}

/// N1 -> N2 -> N3 -> N4 along "Main St" (10 + 10) and "Side St" (5).
///
/// The first and last edges are bent so that their midpoints snap to N1
/// and N4 respectively.
pub fn main_street() -> StreetGraphBuilder {
    let mut builder = StreetGraphBuilder::new();
    for (id, x) in [(1, 0.0), (2, 0.001), (3, 0.002), (4, 0.003)] {
        builder.add_node(id, Point::new(x, 0.0)).unwrap();
    }
    builder
        .add_edge(
            1,
            2,
            edge(
                10.0,
                "Main St",
                line_string![(x: 0.0, y: 0.0), (x: 0.0, y: 0.0006), (x: 0.001, y: 0.0)],
            ),
        )
        .unwrap();
    builder
        .add_edge(2, 3, edge(10.0, "Main St", LineString::new(vec![])))
        .unwrap();
    builder
        .add_edge(
            3,
            4,
            edge(
                5.0,
                "Side St",
                line_string![(x: 0.002, y: 0.0), (x: 0.003, y: 0.0006), (x: 0.003, y: 0.0)],
            ),
        )
        .unwrap();
    builder
}

/// Same network plus a direct N1 -> N4 "Bypass" of length 30
pub fn main_street_with_bypass() -> StreetGraph {
    let mut builder = main_street();
    builder
        .add_edge(
            1,
            4,
            edge(
                30.0,
                "Bypass",
                line_string![(x: 0.0, y: 0.0), (x: 0.0015, y: -0.001), (x: 0.003, y: 0.0)],
            ),
        )
        .unwrap();
    builder.build()
}

pub fn node(graph: &StreetGraph, id: OsmNodeId) -> petgraph::graph::NodeIndex {
    graph.node_index(id).unwrap()
}
