// src/validate/result.rs

use serde::{Deserialize, Serialize};

use crate::validate::findings::{AdvisoryWarning, StructuralError};

/// Outcome of [`crate::validate::validate`].
///
/// `is_valid` is true iff `errors` is empty; warnings never affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn from_findings(errors: &[StructuralError], warnings: &[AdvisoryWarning]) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors: errors.iter().map(ToString::to_string).collect(),
            warnings: warnings.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Structural statistics of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    /// True iff `isolated_nodes` is empty.
    pub is_connected: bool,
    pub has_cycles: bool,
    /// Labels of isolated nodes, in node order.
    pub isolated_nodes: Vec<String>,
}
