// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::types::{DanglingEdgePolicy, OutputFormat};

/// Command-line arguments for `pipedag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pipedag",
    version,
    about = "Validate pipeline DAG documents and report structural statistics.",
    long_about = None
)]
pub struct CliArgs {
    /// Pipeline document (JSON, as exported by the editor).
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Path to the config file (TOML).
    ///
    /// Default: `Pipedag.toml` in the current working directory. A missing
    /// default file means built-in defaults; an explicitly given file must exist.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format for the validation report.
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Keep watching the document and re-validate whenever it changes.
    #[arg(long)]
    pub watch: bool,

    /// Override `[validation].dangling_edges` from the config.
    #[arg(long, value_enum, value_name = "POLICY")]
    pub dangling_edges: Option<DanglingEdgePolicy>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PIPEDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_invocation() {
        let args = CliArgs::try_parse_from(["pipedag", "pipeline.json"]).unwrap();
        assert_eq!(args.document, PathBuf::from("pipeline.json"));
        assert!(args.config.is_none());
        assert!(!args.watch);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.dangling_edges.is_none());
    }

    #[test]
    fn parses_all_flags() {
        let args = CliArgs::try_parse_from([
            "pipedag",
            "--config",
            "cfg/Pipedag.toml",
            "--format",
            "json",
            "--watch",
            "--dangling-edges",
            "ignore",
            "--log-level",
            "debug",
            "p.json",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("cfg/Pipedag.toml")));
        assert!(args.watch);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.dangling_edges, Some(DanglingEdgePolicy::Ignore));
        assert!(matches!(args.log_level, Some(LogLevel::Debug)));
    }

    #[test]
    fn document_is_required() {
        assert!(CliArgs::try_parse_from(["pipedag"]).is_err());
    }
}
