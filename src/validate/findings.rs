// src/validate/findings.rs

//! Typed validation findings.
//!
//! The `Display` output of every variant is the message users see; the
//! wording is stable and consumers may match on it.

use std::fmt;

/// A finding that makes the pipeline invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// Fewer nodes than the configured minimum `min`.
    TooFewNodes { min: usize },
    /// At least one directed cycle (a self-loop counts).
    ContainsCycles,
    /// Labels of nodes with no incident edge, in node order.
    IsolatedNodes(Vec<String>),
    /// At least one edge with `source == target`.
    ///
    /// Always reported together with [`StructuralError::ContainsCycles`];
    /// both messages are kept since consumers may look for either.
    SelfLoops,
    /// An edge endpoint that names no node.
    DanglingReference { edge_id: String, node_id: String },
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralError::TooFewNodes { min } => {
                write!(f, "Pipeline must have at least {min} nodes")
            }
            StructuralError::ContainsCycles => {
                f.write_str("Pipeline contains cycles - DAGs cannot have cycles")
            }
            StructuralError::IsolatedNodes(labels) => {
                write!(f, "Isolated nodes detected: {}", labels.join(", "))
            }
            StructuralError::SelfLoops => f.write_str("Self-loops are not allowed in DAGs"),
            StructuralError::DanglingReference { edge_id, node_id } => {
                write!(f, "Edge '{edge_id}' references unknown node '{node_id}'")
            }
        }
    }
}

/// A finding that is reported but does not affect validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryWarning {
    LargeGraph,
}

impl fmt::Display for AdvisoryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvisoryWarning::LargeGraph => {
                f.write_str("Large number of nodes may impact performance")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        assert_eq!(
            StructuralError::TooFewNodes { min: 2 }.to_string(),
            "Pipeline must have at least 2 nodes"
        );
        assert_eq!(
            StructuralError::TooFewNodes { min: 3 }.to_string(),
            "Pipeline must have at least 3 nodes"
        );
        assert_eq!(
            StructuralError::ContainsCycles.to_string(),
            "Pipeline contains cycles - DAGs cannot have cycles"
        );
        assert_eq!(
            StructuralError::SelfLoops.to_string(),
            "Self-loops are not allowed in DAGs"
        );
        assert_eq!(
            AdvisoryWarning::LargeGraph.to_string(),
            "Large number of nodes may impact performance"
        );
    }

    #[test]
    fn isolated_labels_are_comma_joined() {
        let err = StructuralError::IsolatedNodes(vec!["Load".into(), "Save".into()]);
        assert_eq!(err.to_string(), "Isolated nodes detected: Load, Save");
    }

    #[test]
    fn dangling_reference_names_edge_and_node() {
        let err = StructuralError::DanglingReference {
            edge_id: "e1-9".into(),
            node_id: "9".into(),
        };
        assert_eq!(err.to_string(), "Edge 'e1-9' references unknown node '9'");
    }
}
