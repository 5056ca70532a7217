//! Top-level snapshot types.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::Selection;

/// A file the editor has open, together with its selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    /// Absolute filesystem path of the file.
    pub path: Utf8PathBuf,
    /// Selection or caret in the view that backs this entry.
    #[serde(default)]
    pub selection: Selection,
}

impl FileRef {
    /// Creates a file reference.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>, selection: Selection) -> Self {
        Self {
            path: path.into(),
            selection,
        }
    }
}

/// Snapshot of everything the user currently has open.
///
/// A path appears at most once across `active_files` and `other_files`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    /// One entry per window with an open file, frontmost window first.
    pub active_files: Vec<FileRef>,
    /// Every other open file, in host enumeration order.
    pub other_files: Vec<FileRef>,
    /// Project root folders across all windows.
    pub project_folders: Vec<Utf8PathBuf>,
    /// RFC 3339 timestamp of when the snapshot was built.
    pub last_updated: String,
}

impl EditorState {
    /// Snapshot with nothing open.
    #[must_use]
    pub fn empty(last_updated: impl Into<String>) -> Self {
        Self {
            active_files: Vec::new(),
            other_files: Vec::new(),
            project_folders: Vec::new(),
            last_updated: last_updated.into(),
        }
    }

    /// Returns `true` when the path is listed in either file collection.
    #[must_use]
    pub fn contains_path(&self, path: &Utf8Path) -> bool {
        self.files().any(|file| file.path == path)
    }

    /// Iterates active files followed by other files.
    pub fn files(&self) -> impl Iterator<Item = &FileRef> {
        self.active_files.iter().chain(self.other_files.iter())
    }
}
