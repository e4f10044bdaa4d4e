// src/graph/isolated.rs

use std::collections::HashSet;

use crate::graph::{Edge, Node};

/// Nodes whose id is neither the `source` nor the `target` of any edge, in
/// node order.
///
/// Edges pointing at unknown ids still count as touching their known endpoint.
pub fn isolated_nodes<'a>(nodes: &'a [Node], edges: &[Edge]) -> Vec<&'a Node> {
    let touched: HashSet<&str> = edges
        .iter()
        .flat_map(|e| [e.source.as_str(), e.target.as_str()])
        .collect();

    nodes
        .iter()
        .filter(|n| !touched.contains(n.id.as_str()))
        .collect()
}

/// Labels (not ids) of the isolated nodes, in node order.
pub fn isolated_labels(nodes: &[Node], edges: &[Edge]) -> Vec<String> {
    isolated_nodes(nodes, edges)
        .into_iter()
        .map(|n| n.label.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeKind;

    #[test]
    fn follows_node_order_not_edge_or_alphabetical_order() {
        let nodes = vec![
            Node::new("z", "Zeta", NodeKind::Sink),
            Node::new("m", "Mid", NodeKind::Process),
            Node::new("a", "Alpha", NodeKind::Source),
            Node::new("b", "Beta", NodeKind::Source),
        ];
        let edges = vec![Edge::new("e1", "m", "b")];

        assert_eq!(isolated_labels(&nodes, &edges), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn returns_labels_not_ids() {
        let nodes = vec![Node::new("n-1", "Load CSV", NodeKind::Source)];
        assert_eq!(isolated_labels(&nodes, &[]), vec!["Load CSV"]);
    }

    #[test]
    fn self_loop_and_dangling_edges_touch_their_known_endpoint() {
        let nodes = vec![
            Node::new("a", "A", NodeKind::Process),
            Node::new("b", "B", NodeKind::Process),
            Node::new("c", "C", NodeKind::Process),
        ];
        let edges = vec![Edge::new("e1", "a", "a"), Edge::new("e2", "ghost", "b")];

        let isolated = isolated_nodes(&nodes, &edges);
        assert_eq!(isolated.len(), 1);
        assert_eq!(isolated[0].id, "c");
    }
}
