// src/lib.rs

pub mod cli;
pub mod config;
pub mod document;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod report;
pub mod types;
pub mod validate;
pub mod watch;

use std::time::Duration;

use anyhow::Result;
use tracing::{debug, warn};

use crate::cli::CliArgs;
use crate::config::resolve_config;
use crate::document::load_document;
use crate::report::Report;
use crate::types::OutputFormat;
use crate::validate::Validator;

/// Process exit code when the document loaded fine but is not a valid DAG.
pub const EXIT_INVALID: i32 = 2;

/// High-level entry point used by `main.rs`.
///
/// Loads config, builds the validator, then either validates the document
/// once or keeps watching it. Returns whether the (last) document was valid;
/// watch mode always returns `true` after a clean shutdown.
pub async fn run(args: CliArgs) -> Result<bool> {
    let cfg = resolve_config(args.config.as_deref())?;

    let mut options = cfg.validator_options();
    if let Some(policy) = args.dangling_edges {
        options.dangling_edges = policy;
    }
    let validator = Validator::new(options);
    debug!(?options, "validator configured");

    let format = args.format;

    if args.watch {
        let debounce = Duration::from_millis(cfg.watch.debounce_ms);
        watch::watch_document(args.document, validator, debounce, |report| {
            if let Err(err) = print_report(report, format) {
                warn!("failed to render report: {err}");
            }
        })
        .await?;
        return Ok(true);
    }

    let graph = load_document(&args.document)?;
    let report = Report::build(&graph, &validator);
    print_report(&report, format)?;
    Ok(report.is_valid())
}

fn print_report(report: &Report, format: OutputFormat) -> Result<()> {
    let rendered = report.render(format)?;
    match format {
        OutputFormat::Text => print!("{rendered}"),
        OutputFormat::Json => println!("{rendered}"),
    }
    Ok(())
}
