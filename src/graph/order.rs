// src/graph/order.rs

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::graph::{Edge, Node};

/// Node ids in an order where every edge points forward, or `None` if the
/// graph over known nodes has a cycle (self-loops included).
///
/// Edges with an endpoint that is not a node are skipped.
pub fn topological_order<'a>(nodes: &'a [Node], edges: &'a [Edge]) -> Option<Vec<&'a str>> {
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for node in nodes {
        graph.add_node(node.id.as_str());
    }

    for edge in edges {
        let (src, dst) = (edge.source.as_str(), edge.target.as_str());
        if graph.contains_node(src) && graph.contains_node(dst) {
            graph.add_edge(src, dst, ());
        }
    }

    toposort(&graph, None).ok()
}
