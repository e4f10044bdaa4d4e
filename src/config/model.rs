// src/config/model.rs

use serde::Deserialize;

use crate::types::DanglingEdgePolicy;
use crate::validate::{DEFAULT_LARGE_GRAPH_THRESHOLD, DEFAULT_MIN_NODES, ValidatorOptions};

/// Raw configuration as read from a TOML file, before semantic checks.
///
/// ```toml
/// [validation]
/// min_nodes = 2
/// large_graph_threshold = 20
/// dangling_edges = "error"
///
/// [watch]
/// debounce_ms = 150
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub validation: ValidationSection,

    #[serde(default)]
    pub watch: WatchSection,
}

/// Validated configuration.
///
/// Constructed only via `TryFrom<RawConfigFile>`, which guarantees the
/// thresholds are consistent.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub validation: ValidationSection,
    pub watch: WatchSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(validation: ValidationSection, watch: WatchSection) -> Self {
        Self { validation, watch }
    }

    pub fn validator_options(&self) -> ValidatorOptions {
        ValidatorOptions {
            min_nodes: self.validation.min_nodes,
            large_graph_threshold: self.validation.large_graph_threshold,
            dangling_edges: self.validation.dangling_edges,
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(ValidationSection::default(), WatchSection::default())
    }
}

/// `[validation]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationSection {
    /// Pipelines with fewer nodes get the minimum-size error.
    #[serde(default = "default_min_nodes")]
    pub min_nodes: usize,

    /// Pipelines with more nodes get the large-graph warning.
    #[serde(default = "default_large_graph_threshold")]
    pub large_graph_threshold: usize,

    /// `"error"` (default) or `"ignore"`.
    #[serde(default)]
    pub dangling_edges: DanglingEdgePolicy,
}

fn default_min_nodes() -> usize {
    DEFAULT_MIN_NODES
}

fn default_large_graph_threshold() -> usize {
    DEFAULT_LARGE_GRAPH_THRESHOLD
}

impl Default for ValidationSection {
    fn default() -> Self {
        Self {
            min_nodes: default_min_nodes(),
            large_graph_threshold: default_large_graph_threshold(),
            dangling_edges: DanglingEdgePolicy::default(),
        }
    }
}

/// `[watch]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WatchSection {
    /// Quiet period after a change before the document is re-read.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    150
}

impl Default for WatchSection {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}
