// src/watch/watcher.rs

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::info;

/// Handle for the filesystem watcher.
///
/// Keeps the underlying `RecommendedWatcher` alive. Dropping this handle stops
/// file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Watch the directory containing `document` and send a unit message on
/// `change_tx` for every create/modify/remove event that touches it.
///
/// The parent directory is watched, not the file, so saves that replace the
/// file by rename are still seen.
pub fn spawn_watcher(
    document: impl AsRef<Path>,
    change_tx: mpsc::UnboundedSender<()>,
) -> Result<WatcherHandle> {
    let document = document.as_ref();
    let file_name: OsString = document
        .file_name()
        .with_context(|| format!("document path has no file name: {:?}", document))?
        .to_os_string();
    let dir = watch_dir(document);

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if touches(&event, &file_name) {
                    if let Err(err) = change_tx.send(()) {
                        // Receiver gone; the watch loop has shut down.
                        eprintln!("pipedag: failed to forward change event: {err}");
                    }
                }
            }
            Err(err) => {
                eprintln!("pipedag: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    watcher.watch(&dir, RecursiveMode::NonRecursive)?;

    info!("watching {:?} for changes", document);

    Ok(WatcherHandle { _inner: watcher })
}

fn watch_dir(document: &Path) -> PathBuf {
    match document.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn touches(event: &Event, file_name: &OsString) -> bool {
    let relevant = event.kind.is_create() || event.kind.is_modify() || event.kind.is_remove();
    relevant
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name.as_os_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::EventKind;
    use notify::event::{AccessKind, CreateKind, ModifyKind};

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn only_relevant_events_on_the_document_count() {
        let name = OsString::from("pipeline.json");

        assert!(touches(
            &event(EventKind::Modify(ModifyKind::Any), "/tmp/x/pipeline.json"),
            &name
        ));
        assert!(touches(
            &event(EventKind::Create(CreateKind::File), "/tmp/x/pipeline.json"),
            &name
        ));
        assert!(!touches(
            &event(EventKind::Modify(ModifyKind::Any), "/tmp/x/other.json"),
            &name
        ));
        assert!(!touches(
            &event(EventKind::Access(AccessKind::Any), "/tmp/x/pipeline.json"),
            &name
        ));
    }

    #[test]
    fn bare_file_name_watches_current_dir() {
        assert_eq!(watch_dir(Path::new("pipeline.json")), PathBuf::from("."));
        assert_eq!(
            watch_dir(Path::new("docs/pipeline.json")),
            PathBuf::from("docs")
        );
    }
}
