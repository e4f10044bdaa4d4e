// src/graph/references.rs

use std::collections::HashSet;

use crate::graph::{Edge, Node};

/// An edge endpoint that names no node in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingEndpoint {
    pub edge_id: String,
    pub node_id: String,
}

/// Every unresolved endpoint, in edge order; within an edge the source comes
/// before the target. A self-loop on an unknown id is reported once.
pub fn dangling_endpoints(nodes: &[Node], edges: &[Edge]) -> Vec<DanglingEndpoint> {
    let known: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let mut out = Vec::new();

    for edge in edges {
        if !known.contains(edge.source.as_str()) {
            out.push(DanglingEndpoint {
                edge_id: edge.id.clone(),
                node_id: edge.source.clone(),
            });
        }
        if !edge.is_self_loop() && !known.contains(edge.target.as_str()) {
            out.push(DanglingEndpoint {
                edge_id: edge.id.clone(),
                node_id: edge.target.clone(),
            });
        }
    }

    out
}
