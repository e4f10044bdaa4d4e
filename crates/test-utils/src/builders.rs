#![allow(dead_code)]

use pipedag::graph::{Edge, Node, NodeKind, PipelineGraph};

/// Builder for node/edge snapshots to simplify test setup.
///
/// Node labels default to the upper-cased id; edge ids are generated as
/// `e<source>-<target>` unless given explicitly.
#[derive(Debug, Default, Clone)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(self, id: &str) -> Self {
        let label = id.to_uppercase();
        self.labelled(id, &label)
    }

    pub fn labelled(self, id: &str, label: &str) -> Self {
        self.typed(id, label, NodeKind::Process)
    }

    pub fn typed(mut self, id: &str, label: &str, kind: NodeKind) -> Self {
        self.nodes.push(Node::new(id, label, kind));
        self
    }

    pub fn nodes(self, ids: &[&str]) -> Self {
        ids.iter().fold(self, |b, id| b.node(id))
    }

    pub fn edge(self, source: &str, target: &str) -> Self {
        let id = format!("e{source}-{target}");
        self.edge_with_id(&id, source, target)
    }

    pub fn edge_with_id(mut self, id: &str, source: &str, target: &str) -> Self {
        self.edges.push(Edge::new(id, source, target));
        self
    }

    /// `n` nodes `n0..n{n-1}` linked `n0 -> n1 -> ...`.
    pub fn chain(n: usize) -> Self {
        let mut b = Self::new();
        for i in 0..n {
            b = b.node(&format!("n{i}"));
        }
        for i in 1..n {
            b = b.edge(&format!("n{}", i - 1), &format!("n{i}"));
        }
        b
    }

    pub fn parts(&self) -> (&[Node], &[Edge]) {
        (&self.nodes, &self.edges)
    }

    pub fn into_parts(self) -> (Vec<Node>, Vec<Edge>) {
        (self.nodes, self.edges)
    }

    pub fn build(self) -> PipelineGraph {
        PipelineGraph::new(self.nodes, self.edges).expect("Failed to build valid graph from builder")
    }
}
