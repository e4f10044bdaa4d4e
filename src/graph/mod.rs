// src/graph/mod.rs

//! Pipeline graph model and the structural algorithms run over it.
//!
//! - [`adjacency`] derives the node id → successor ids mapping.
//! - [`cycles`] detects directed cycles (self-loops included).
//! - [`isolated`] finds nodes with no incident edges.
//! - [`references`] finds edge endpoints that name no node.
//! - [`order`] computes a topological order for acyclic graphs.
//!
//! All algorithms take plain node/edge slices and never mutate them.
//! [`PipelineGraph`] is the strict snapshot: it rejects duplicate ids up front.

pub mod adjacency;
pub mod cycles;
pub mod isolated;
pub mod order;
pub mod references;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{PipedagError, Result};
use crate::validate::{GraphStats, ValidationResult, Validator};

pub use adjacency::Adjacency;
pub use cycles::has_cycle;
pub use isolated::{isolated_labels, isolated_nodes};
pub use order::topological_order;
pub use references::{DanglingEndpoint, dangling_endpoints};

/// Kind of pipeline stage a node represents.
///
/// Unrecognised kinds are kept verbatim so a loaded document exports the same
/// way it came in. The validator itself never looks at the kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Source,
    Process,
    Sink,
    #[default]
    Default,
    Custom(String),
}

impl NodeKind {
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Source => "source",
            NodeKind::Process => "process",
            NodeKind::Sink => "sink",
            NodeKind::Default => "default",
            NodeKind::Custom(s) => s.as_str(),
        }
    }
}

impl From<String> for NodeKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "source" => NodeKind::Source,
            "process" => NodeKind::Process,
            "sink" => NodeKind::Sink,
            "default" => NodeKind::Default,
            _ => NodeKind::Custom(s),
        }
    }
}

impl From<&str> for NodeKind {
    fn from(s: &str) -> Self {
        NodeKind::from(s.to_string())
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Custom(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canvas position of a node. Carried for export only.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A pipeline stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    #[serde(default)]
    pub position: Position,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            position: Position::default(),
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Position { x, y };
        self
    }
}

/// A directed connection `source -> target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Edge style as stored by the editor (`"default"` when absent).
    #[serde(rename = "type", default = "default_edge_kind")]
    pub kind: String,
}

fn default_edge_kind() -> String {
    "default".to_string()
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            kind: default_edge_kind(),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// An immutable graph snapshot whose node ids and edge ids are unique.
///
/// Edge endpoints are *not* required to resolve; dangling references are a
/// validation finding, not a construction error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl PipelineGraph {
    /// Build a snapshot, failing fast on duplicate node or edge ids.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(nodes.len());
        for node in &nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(PipedagError::DuplicateNodeId(node.id.clone()));
            }
        }

        let mut seen = HashSet::with_capacity(edges.len());
        for edge in &edges {
            if !seen.insert(edge.id.as_str()) {
                return Err(PipedagError::DuplicateEdgeId(edge.id.clone()));
            }
        }

        Ok(Self { nodes, edges })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn into_parts(self) -> (Vec<Node>, Vec<Edge>) {
        (self.nodes, self.edges)
    }

    /// Validate with the default thresholds and dangling-edge policy.
    pub fn validate(&self) -> ValidationResult {
        Validator::default().validate(&self.nodes, &self.edges)
    }

    pub fn validate_with(&self, validator: &Validator) -> ValidationResult {
        validator.validate(&self.nodes, &self.edges)
    }

    pub fn statistics(&self) -> GraphStats {
        crate::validate::statistics(&self.nodes, &self.edges)
    }

    /// Node ids in dependency order, or `None` if the graph has a cycle.
    pub fn topological_order(&self) -> Option<Vec<&str>> {
        topological_order(&self.nodes, &self.edges)
    }
}
