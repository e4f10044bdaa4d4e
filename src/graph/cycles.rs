// src/graph/cycles.rs

//! Directed cycle detection.
//!
//! Depth-first search with a global `visited` set and a path-local `on_stack`
//! set. The search uses an explicit work stack of `(node, next successor
//! index)` frames instead of recursion, so a long chain costs heap memory
//! rather than call-stack depth.

use std::collections::HashSet;

use tracing::trace;

use crate::graph::{Adjacency, Edge, Node};

/// Returns `true` if the graph induced by `nodes`/`edges` has a directed
/// cycle. A self-loop is a one-node cycle.
///
/// The search starts from every node (in node order) that no earlier search
/// has visited, and stops at the first cycle found.
pub fn has_cycle(nodes: &[Node], edges: &[Edge]) -> bool {
    let adj = Adjacency::build(nodes, edges);
    has_cycle_from(&adj, nodes.iter().map(|n| n.id.as_str()))
}

/// Cycle search over a prebuilt adjacency mapping, starting from `starts` in
/// the given order.
pub fn has_cycle_from<'a, I>(adj: &Adjacency<'a>, starts: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let mut visited: HashSet<&'a str> = HashSet::new();
    let mut on_stack: HashSet<&'a str> = HashSet::new();
    let mut stack: Vec<(&'a str, usize)> = Vec::new();

    for start in starts {
        if visited.contains(start) {
            continue;
        }

        visited.insert(start);
        on_stack.insert(start);
        stack.push((start, 0));

        while let Some(&(node, next_idx)) = stack.last() {
            match adj.successors(node).get(next_idx) {
                Some(&succ) => {
                    if let Some(top) = stack.last_mut() {
                        top.1 += 1;
                    }

                    if on_stack.contains(succ) {
                        trace!(from = node, to = succ, "back edge found");
                        return true;
                    }

                    if visited.insert(succ) {
                        on_stack.insert(succ);
                        stack.push((succ, 0));
                    }
                }
                None => {
                    on_stack.remove(node);
                    stack.pop();
                }
            }
        }
    }

    false
}
