use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode};
use notify_debouncer_full::{new_debouncer, DebounceEventResult, Debouncer, RecommendedCache};

const DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetChanged;

pub type DatasetWatcher = Debouncer<RecommendedWatcher, RecommendedCache>;

/// Watches the directory holding `dataset` and reports changes to that file.
///
/// The parent directory is watched rather than the file so that editors which
/// save by rename keep being noticed.
pub fn watch_dataset(
    dataset: &Path,
    sender: mpsc::Sender<DatasetChanged>,
    repaint: egui::Context,
) -> notify::Result<DatasetWatcher> {
    let dataset = absolute(dataset);
    let dir = dataset
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = dataset.file_name().map(OsStr::to_os_string);

    let mut debouncer = new_debouncer(DEBOUNCE, None, move |result: DebounceEventResult| {
        match result {
            Ok(events) => {
                if events
                    .iter()
                    .any(|event| touches_dataset(event, file_name.as_deref()))
                {
                    log::info!("Dataset changed on disk");
                    if sender.send(DatasetChanged).is_ok() {
                        repaint.request_repaint();
                    }
                }
            }
            Err(errors) => {
                for e in errors {
                    log::error!("Dataset watcher error: {}", e);
                }
            }
        }
    })?;

    debouncer.watch(&dir, RecursiveMode::NonRecursive)?;
    log::info!("Watching {} for changes", dataset.display());

    Ok(debouncer)
}

fn touches_dataset(event: &Event, file_name: Option<&OsStr>) -> bool {
    is_content_change(&event.kind)
        && file_name.is_some()
        && event.paths.iter().any(|path| path.file_name() == file_name)
}

fn is_content_change(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    )
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
