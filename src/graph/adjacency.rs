// src/graph/adjacency.rs

use std::collections::HashMap;

use crate::graph::{Edge, Node};

/// Directed adjacency mapping: node id → ordered successor ids.
///
/// Every node id gets an entry (possibly empty). An edge whose source is not a
/// node still creates an entry for that source, so a dangling source that is
/// reached through another edge keeps its outgoing arcs. Ids with no entry at
/// all have no successors.
#[derive(Debug, Clone, Default)]
pub struct Adjacency<'a> {
    successors: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> Adjacency<'a> {
    pub fn build(nodes: &'a [Node], edges: &'a [Edge]) -> Self {
        let mut successors: HashMap<&'a str, Vec<&'a str>> = HashMap::with_capacity(nodes.len());

        for node in nodes {
            successors.entry(node.id.as_str()).or_default();
        }

        for edge in edges {
            successors
                .entry(edge.source.as_str())
                .or_default()
                .push(edge.target.as_str());
        }

        Self { successors }
    }

    /// Successors of `id`, in edge order. Unknown ids yield an empty slice.
    pub fn successors(&self, id: &str) -> &[&'a str] {
        self.successors
            .get(id)
            .map(|s| s.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `id` has an entry (a node, or the source of some edge).
    pub fn contains(&self, id: &str) -> bool {
        self.successors.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.successors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }
}
