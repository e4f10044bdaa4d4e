use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;

/// What the validator does with an edge whose `source` or `target` names no
/// node in the snapshot.
///
/// - `Error` (default): report an extra structural error per unknown endpoint.
/// - `Ignore`: say nothing; the edge still counts for isolation and still
///   feeds the adjacency mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DanglingEdgePolicy {
    #[default]
    Error,
    Ignore,
}

impl FromStr for DanglingEdgePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(DanglingEdgePolicy::Error),
            "ignore" => Ok(DanglingEdgePolicy::Ignore),
            other => Err(format!(
                "invalid dangling_edges: {other} (expected \"error\" or \"ignore\")"
            )),
        }
    }
}

/// How a report is printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable validation panel.
    #[default]
    Text,
    /// Pretty-printed JSON with `validation` and `stats` objects.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dangling_policy_parses_case_insensitively() {
        assert_eq!(
            " Ignore ".parse::<DanglingEdgePolicy>(),
            Ok(DanglingEdgePolicy::Ignore)
        );
        assert_eq!(
            "ERROR".parse::<DanglingEdgePolicy>(),
            Ok(DanglingEdgePolicy::Error)
        );
        assert!("warn".parse::<DanglingEdgePolicy>().is_err());
    }
}
