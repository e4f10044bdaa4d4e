// src/document.rs

//! Pipeline JSON documents, in the shape the editor exports:
//!
//! ```json
//! {
//!   "nodes": [{ "id": "1", "label": "Data Source", "type": "source",
//!               "position": { "x": 250, "y": 50 } }],
//!   "edges": [{ "id": "e1-2", "source": "1", "target": "2", "type": "default" }]
//! }
//! ```
//!
//! Node `type`/`position`, edge `type`, and both top-level arrays are optional
//! on input. Output always writes every field.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::Result;
use crate::graph::{Edge, Node, PipelineGraph};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PipelineDocument {
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    edges: Vec<Edge>,
}

/// Parse a document and build a strict snapshot from it.
pub fn parse_document(contents: &str) -> Result<PipelineGraph> {
    let doc: PipelineDocument = serde_json::from_str(contents)?;
    PipelineGraph::new(doc.nodes, doc.edges)
}

/// Read and parse a document from disk.
pub fn load_document(path: impl AsRef<Path>) -> Result<PipelineGraph> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let graph = parse_document(&contents)?;
    debug!(
        path = %path.display(),
        nodes = graph.nodes().len(),
        edges = graph.edges().len(),
        "loaded pipeline document"
    );
    Ok(graph)
}

/// Serialise a snapshot as pretty-printed JSON (2-space indent).
pub fn to_document_string(graph: &PipelineGraph) -> Result<String> {
    let doc = PipelineDocument {
        nodes: graph.nodes().to_vec(),
        edges: graph.edges().to_vec(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Write a snapshot to disk, creating parent directories as needed.
pub fn save_document(path: impl AsRef<Path>, graph: &PipelineGraph) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, to_document_string(graph)?)?;
    Ok(())
}
