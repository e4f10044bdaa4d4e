// src/validate/mod.rs

//! The pipeline graph validator.
//!
//! Two pure operations over a node/edge snapshot:
//!
//! - [`validate`] runs the structural checks in a fixed order and collects
//!   every finding (no short-circuiting):
//!   1. minimum node count,
//!   2. directed cycles,
//!   3. isolated nodes,
//!   4. self-loops,
//!   5. dangling edge references (unless the policy is `ignore`),
//!   6. large-graph warning.
//! - [`statistics`] reports counts, connectivity and cycle presence.
//!
//! [`Validator`] holds only thresholds and policy; it keeps no state between
//! calls, so one value can be shared freely across threads.

pub mod findings;
pub mod result;

use tracing::debug;

use crate::graph::{Edge, Node, dangling_endpoints, has_cycle, isolated_labels};
use crate::types::DanglingEdgePolicy;

pub use findings::{AdvisoryWarning, StructuralError};
pub use result::{GraphStats, ValidationResult};

/// Default minimum number of nodes in a valid pipeline.
pub const DEFAULT_MIN_NODES: usize = 2;

/// Default node count above which the large-graph warning is emitted.
pub const DEFAULT_LARGE_GRAPH_THRESHOLD: usize = 20;

/// Tunables for [`Validator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorOptions {
    pub min_nodes: usize,
    pub large_graph_threshold: usize,
    pub dangling_edges: DanglingEdgePolicy,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            min_nodes: DEFAULT_MIN_NODES,
            large_graph_threshold: DEFAULT_LARGE_GRAPH_THRESHOLD,
            dangling_edges: DanglingEdgePolicy::default(),
        }
    }
}

/// Findings of one validation pass, before they are rendered to strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub errors: Vec<StructuralError>,
    pub warnings: Vec<AdvisoryWarning>,
}

impl Findings {
    pub fn into_result(self) -> ValidationResult {
        ValidationResult::from_findings(&self.errors, &self.warnings)
    }
}

/// Stateless validator configured with [`ValidatorOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    options: ValidatorOptions,
}

impl Validator {
    pub fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Run every check and return typed findings in check order.
    pub fn findings(&self, nodes: &[Node], edges: &[Edge]) -> Findings {
        let mut out = Findings::default();

        if nodes.len() < self.options.min_nodes {
            out.errors.push(StructuralError::TooFewNodes {
                min: self.options.min_nodes,
            });
        }

        if has_cycle(nodes, edges) {
            out.errors.push(StructuralError::ContainsCycles);
        }

        let isolated = isolated_labels(nodes, edges);
        if !isolated.is_empty() {
            out.errors.push(StructuralError::IsolatedNodes(isolated));
        }

        if edges.iter().any(Edge::is_self_loop) {
            out.errors.push(StructuralError::SelfLoops);
        }

        if self.options.dangling_edges == DanglingEdgePolicy::Error {
            out.errors.extend(dangling_endpoints(nodes, edges).into_iter().map(|d| {
                StructuralError::DanglingReference {
                    edge_id: d.edge_id,
                    node_id: d.node_id,
                }
            }));
        }

        if nodes.len() > self.options.large_graph_threshold {
            out.warnings.push(AdvisoryWarning::LargeGraph);
        }

        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            errors = out.errors.len(),
            warnings = out.warnings.len(),
            "validated pipeline graph"
        );

        out
    }

    pub fn validate(&self, nodes: &[Node], edges: &[Edge]) -> ValidationResult {
        self.findings(nodes, edges).into_result()
    }

    /// Statistics do not depend on the options; provided for symmetry.
    pub fn statistics(&self, nodes: &[Node], edges: &[Edge]) -> GraphStats {
        statistics(nodes, edges)
    }
}

/// Validate with default thresholds (2 / 20) and dangling edges as errors.
pub fn validate(nodes: &[Node], edges: &[Edge]) -> ValidationResult {
    Validator::default().validate(nodes, edges)
}

pub fn statistics(nodes: &[Node], edges: &[Edge]) -> GraphStats {
    let isolated_nodes = isolated_labels(nodes, edges);

    GraphStats {
        node_count: nodes.len(),
        edge_count: edges.len(),
        is_connected: isolated_nodes.is_empty(),
        has_cycles: has_cycle(nodes, edges),
        isolated_nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeKind;

    fn node(id: &str) -> Node {
        Node::new(id, id, NodeKind::Process)
    }

    fn chain(n: usize) -> (Vec<Node>, Vec<Edge>) {
        let nodes: Vec<Node> = (0..n).map(|i| node(&format!("n{i}"))).collect();
        let edges = (1..n)
            .map(|i| Edge::new(format!("e{i}"), format!("n{}", i - 1), format!("n{i}")))
            .collect();
        (nodes, edges)
    }

    #[test]
    fn errors_follow_check_order() {
        // One node with a self-loop, plus an edge to nowhere.
        let nodes = vec![node("a")];
        let edges = vec![Edge::new("e1", "a", "a"), Edge::new("e2", "a", "ghost")];

        let findings = Validator::default().findings(&nodes, &edges);

        assert_eq!(
            findings.errors,
            vec![
                StructuralError::TooFewNodes { min: 2 },
                StructuralError::ContainsCycles,
                StructuralError::SelfLoops,
                StructuralError::DanglingReference {
                    edge_id: "e2".into(),
                    node_id: "ghost".into(),
                },
            ]
        );
        assert!(findings.warnings.is_empty());
    }

    #[test]
    fn ignore_policy_drops_dangling_errors_only() {
        let nodes = vec![node("a"), node("b")];
        let edges = vec![Edge::new("e1", "a", "b"), Edge::new("e2", "b", "ghost")];

        let strict = validate(&nodes, &edges);
        assert!(!strict.is_valid);
        assert_eq!(
            strict.errors,
            vec!["Edge 'e2' references unknown node 'ghost'"]
        );

        let lenient = Validator::new(ValidatorOptions {
            dangling_edges: DanglingEdgePolicy::Ignore,
            ..ValidatorOptions::default()
        })
        .validate(&nodes, &edges);
        assert!(lenient.is_valid);
    }

    #[test]
    fn thresholds_are_configurable() {
        let (nodes, edges) = chain(5);
        let validator = Validator::new(ValidatorOptions {
            min_nodes: 6,
            large_graph_threshold: 4,
            ..ValidatorOptions::default()
        });

        let result = validator.validate(&nodes, &edges);

        assert_eq!(result.errors, vec!["Pipeline must have at least 6 nodes"]);
        assert_eq!(
            result.warnings,
            vec!["Large number of nodes may impact performance"]
        );
    }

    #[test]
    fn raised_minimum_is_named_in_the_message() {
        let nodes = vec![node("a"), node("b")];
        let edges = vec![Edge::new("e1", "a", "b")];
        let validator = Validator::new(ValidatorOptions {
            min_nodes: 3,
            ..ValidatorOptions::default()
        });

        let result = validator.validate(&nodes, &edges);

        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Pipeline must have at least 3 nodes"]);
    }

    #[test]
    fn warning_threshold_is_strictly_greater_than() {
        let (nodes, edges) = chain(20);
        assert!(validate(&nodes, &edges).warnings.is_empty());

        let (nodes, edges) = chain(21);
        let result = validate(&nodes, &edges);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn empty_graph_is_a_valid_input() {
        let result = validate(&[], &[]);
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Pipeline must have at least 2 nodes"]);

        let stats = statistics(&[], &[]);
        assert_eq!(stats.node_count, 0);
        assert!(stats.is_connected);
        assert!(!stats.has_cycles);
    }

    #[test]
    fn statistics_count_and_flag() {
        let nodes = vec![node("a"), node("b"), node("c")];
        let edges = vec![Edge::new("e1", "a", "b"), Edge::new("e2", "b", "a")];

        let stats = Validator::default().statistics(&nodes, &edges);

        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.edge_count, 2);
        assert!(stats.has_cycles);
        assert!(!stats.is_connected);
        assert_eq!(stats.isolated_nodes, vec!["c"]);
    }
}
