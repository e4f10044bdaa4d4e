// src/watch/mod.rs

//! Live re-validation of a pipeline document.
//!
//! - [`watcher`] wires a `notify` watcher to a tokio channel.
//! - [`hash`] remembers the last contents so unchanged saves are skipped.
//! - [`revalidate`] turns document contents into a [`Report`].
//!
//! [`run_loop`] is the async shell: debounce, read, re-validate, emit.

pub mod hash;
pub mod revalidate;
pub mod watcher;

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::report::Report;
use crate::validate::Validator;

pub use hash::{ContentMemo, content_hash};
pub use revalidate::{Revalidation, Revalidator};
pub use watcher::{WatcherHandle, spawn_watcher};

/// Watch `document` until Ctrl-C, calling `emit` with a report for the
/// initial contents and for every change.
pub async fn watch_document<F>(
    document: PathBuf,
    validator: Validator,
    debounce: Duration,
    emit: F,
) -> Result<()>
where
    F: FnMut(&Report),
{
    let (change_tx, change_rx) = mpsc::unbounded_channel();
    let _watcher = spawn_watcher(&document, change_tx)?;

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    run_loop(&document, Revalidator::new(validator), debounce, change_rx, shutdown, emit).await;
    Ok(())
}

/// Event loop behind [`watch_document`], independent of the OS watcher.
///
/// Validates once at start, then on each change message waits `debounce`,
/// drains queued messages, and re-reads the document. Ends when `shutdown`
/// completes, including in the middle of a debounce wait, or when every
/// sender is dropped.
pub async fn run_loop<S, F>(
    document: &Path,
    mut revalidator: Revalidator,
    debounce: Duration,
    mut changes: mpsc::UnboundedReceiver<()>,
    shutdown: S,
    mut emit: F,
) where
    S: Future<Output = ()>,
    F: FnMut(&Report),
{
    tokio::pin!(shutdown);

    revalidate_file(document, &mut revalidator, &mut emit).await;

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("shutdown requested; stopping watch");
                break;
            }
            msg = changes.recv() => {
                if msg.is_none() {
                    debug!("change channel closed");
                    break;
                }
                tokio::select! {
                    _ = &mut shutdown => {
                        info!("shutdown requested during debounce; stopping watch");
                        break;
                    }
                    _ = tokio::time::sleep(debounce) => {}
                }
                while changes.try_recv().is_ok() {}
                revalidate_file(document, &mut revalidator, &mut emit).await;
            }
        }
    }
}

async fn revalidate_file<F>(document: &Path, revalidator: &mut Revalidator, emit: &mut F)
where
    F: FnMut(&Report),
{
    let contents = match tokio::fs::read_to_string(document).await {
        Ok(c) => c,
        Err(err) => {
            warn!("failed to read {:?}: {err}", document);
            return;
        }
    };

    match revalidator.process(&contents) {
        Revalidation::Validated(report) => emit(&report),
        Revalidation::Unchanged | Revalidation::Unreadable(_) => {}
    }
}
