//! Aggregates host state into an [`EditorState`].

use std::collections::HashSet;

use camino::Utf8PathBuf;
use editor_context_types::{EditorState, FileRef, Selection};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

use super::SNAPSHOT_TARGET;
use super::host::{EditorHost, OpenFile, ViewId, WindowId};

/// Builds a snapshot of the host's current state, stamped with the current
/// time.
///
/// Zero open windows is a valid state and yields empty collections.
pub fn build<H>(host: &H) -> EditorState
where
    H: EditorHost + ?Sized,
{
    build_at(host, snapshot_timestamp())
}

/// Builds a snapshot with an explicit `lastUpdated` value.
pub fn build_at<H>(host: &H, last_updated: impl Into<String>) -> EditorState
where
    H: EditorHost + ?Sized,
{
    let windows = host.list_windows();
    let mut seen = HashSet::new();

    let active_files = frontmost_first(&windows, host.active_window())
        .into_iter()
        .filter_map(|window| active_file_of(host, window))
        .filter(|file| seen.insert(file.path.clone()))
        .map(|file| file_ref(host, file))
        .collect::<Vec<_>>();

    let other_files = windows
        .iter()
        .flat_map(|window| host.open_files_of(*window))
        .filter(|file| seen.insert(file.path.clone()))
        .map(|file| file_ref(host, file))
        .collect::<Vec<_>>();

    let mut seen_folders = HashSet::new();
    let project_folders = windows
        .iter()
        .flat_map(|window| host.project_folders_of(*window))
        .filter(|folder| seen_folders.insert(folder.clone()))
        .collect::<Vec<Utf8PathBuf>>();

    debug!(
        target: SNAPSHOT_TARGET,
        windows = windows.len(),
        active = active_files.len(),
        other = other_files.len(),
        folders = project_folders.len(),
        "built editor snapshot"
    );

    EditorState {
        active_files,
        other_files,
        project_folders,
        last_updated: last_updated.into(),
    }
}

/// Serialises a snapshot as indented JSON, the form served to clients and
/// printed by the debug command.
///
/// # Errors
///
/// Returns an error if serialisation fails.
pub fn render_state(state: &EditorState) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(state)
}

/// Current UTC time as RFC 3339, falling back to Unix seconds when the clock
/// is outside the representable range.
#[must_use]
pub fn snapshot_timestamp() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(&Rfc3339)
        .unwrap_or_else(|_| now.unix_timestamp().to_string())
}

fn frontmost_first(windows: &[WindowId], active: Option<WindowId>) -> Vec<WindowId> {
    let mut ordered = windows.to_vec();
    if let Some(index) = active.and_then(|focused| ordered.iter().position(|w| *w == focused)) {
        let focused = ordered.remove(index);
        ordered.insert(0, focused);
    }
    ordered
}

fn active_file_of<H>(host: &H, window: WindowId) -> Option<OpenFile>
where
    H: EditorHost + ?Sized,
{
    let view = host.active_view(window)?;
    host.open_files_of(window)
        .into_iter()
        .find(|file| file.view == view)
}

fn file_ref<H>(host: &H, file: OpenFile) -> FileRef
where
    H: EditorHost + ?Sized,
{
    let selection = selection_of(host, file.view);
    FileRef::new(file.path, selection)
}

fn selection_of<H>(host: &H, view: ViewId) -> Selection
where
    H: EditorHost + ?Sized,
{
    match host.selection_of(view) {
        Ok(regions) => regions
            .first()
            .map_or(Selection::None, |primary| primary.to_selection()),
        Err(error) => {
            debug!(
                target: SNAPSHOT_TARGET,
                %view,
                %error,
                "selection unavailable"
            );
            Selection::None
        }
    }
}
