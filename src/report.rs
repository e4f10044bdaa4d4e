// src/report.rs

//! Rendering of the validation panel: status, errors, warnings, statistics.

use std::fmt;

use serde::Serialize;

use crate::errors::Result;
use crate::graph::PipelineGraph;
use crate::types::OutputFormat;
use crate::validate::{GraphStats, ValidationResult, Validator};

/// Everything the panel shows for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub validation: ValidationResult,
    pub stats: GraphStats,
    /// Node labels in dependency order; `None` when the graph has a cycle.
    #[serde(skip)]
    pub order: Option<Vec<String>>,
}

impl Report {
    pub fn build(graph: &PipelineGraph, validator: &Validator) -> Self {
        let stats = graph.statistics();

        // A cycle through an unknown id is invisible to the ordering, which
        // skips dangling edges, so gate on the statistics instead.
        let order = if stats.has_cycles {
            None
        } else {
            graph.topological_order().map(|ids| {
                ids.into_iter()
                    .filter_map(|id| graph.node(id).map(|n| n.label.clone()))
                    .collect()
            })
        };

        Self {
            validation: graph.validate_with(validator),
            stats,
            order,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validation.is_valid
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = &self.validation;
        let s = &self.stats;

        writeln!(f, "{}", if v.is_valid { "Valid DAG" } else { "Invalid DAG" })?;
        writeln!(
            f,
            "Pipeline Status: {}",
            if v.is_valid { "Ready for execution" } else { "Contains errors" }
        )?;

        if !v.errors.is_empty() {
            f.write_str("\nErrors:\n")?;
            for e in &v.errors {
                writeln!(f, "  • {e}")?;
            }
        }

        if !v.warnings.is_empty() {
            f.write_str("\nWarnings:\n")?;
            for w in &v.warnings {
                writeln!(f, "  • {w}")?;
            }
        }

        f.write_str("\nStatistics:\n")?;
        writeln!(f, "  Nodes: {}", s.node_count)?;
        writeln!(f, "  Edges: {}", s.edge_count)?;
        writeln!(f, "  Connected: {}", yes_no(s.is_connected))?;
        writeln!(f, "  Has Cycles: {}", yes_no(s.has_cycles))?;

        if let Some(order) = self.order.as_ref().filter(|o| !o.is_empty()) {
            writeln!(f, "  Order: {}", order.join(" -> "))?;
        }

        Ok(())
    }
}

fn yes_no(b: bool) -> &'static str {
    if b { "Yes" } else { "No" }
}
