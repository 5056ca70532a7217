//! Editor host backed by a JSON host-state document.
//!
//! An editor integration keeps the document current; the host re-reads it on
//! every refresh so each snapshot reflects the file at the instant of the
//! request. A missing document means no editor is open.

use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::snapshot::{EditorHost, HostError, HostPoint, OpenFile, Region, ViewId, WindowId};

use super::HOST_TARGET;

/// Errors raised while loading the host-state document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document exists but could not be read.
    #[error("failed to read host state '{path}': {source}")]
    Read {
        /// Document path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// The document is not valid host-state JSON.
    #[error("failed to parse host state '{path}': {source}")]
    Parse {
        /// Document path.
        path: Utf8PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HostDocument {
    #[serde(default)]
    active_window: Option<u64>,
    #[serde(default)]
    windows: Vec<WindowDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WindowDocument {
    id: u64,
    #[serde(default)]
    folders: Vec<Utf8PathBuf>,
    #[serde(default)]
    active_view: Option<u64>,
    #[serde(default)]
    views: Vec<ViewDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViewDocument {
    id: u64,
    #[serde(default)]
    file_name: Option<Utf8PathBuf>,
    // Absent means the view has no live caret.
    #[serde(default)]
    selections: Option<Vec<RegionDocument>>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct RegionDocument {
    anchor: (u32, u32),
    caret: (u32, u32),
}

impl From<RegionDocument> for Region {
    fn from(region: RegionDocument) -> Self {
        let (anchor_row, anchor_column) = region.anchor;
        let (caret_row, caret_column) = region.caret;
        Self::new(
            HostPoint::new(anchor_row, anchor_column),
            HostPoint::new(caret_row, caret_column),
        )
    }
}

/// Host that reads editor state from a JSON document.
#[derive(Debug, Default)]
pub struct DocumentHost {
    path: Option<Utf8PathBuf>,
    document: HostDocument,
}

impl DocumentHost {
    /// Creates a host over `path`. Without a path every snapshot is empty.
    ///
    /// Nothing is read until the first [`EditorHost::refresh`].
    #[must_use]
    pub fn new(path: Option<Utf8PathBuf>) -> Self {
        Self {
            path,
            document: HostDocument::default(),
        }
    }

    /// Document this host reads, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        self.path.as_deref()
    }

    /// Re-reads the document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError`] when the document exists but cannot be read
    /// or parsed.
    pub fn reload(&mut self) -> Result<(), DocumentError> {
        self.document = match &self.path {
            Some(path) => load_document(path)?,
            None => HostDocument::default(),
        };
        Ok(())
    }

    fn window(&self, id: WindowId) -> Option<&WindowDocument> {
        self.document
            .windows
            .iter()
            .find(|window| window.id == id.0)
    }

    fn view(&self, id: ViewId) -> Option<&ViewDocument> {
        self.document
            .windows
            .iter()
            .flat_map(|window| window.views.iter())
            .find(|view| view.id == id.0)
    }
}

fn load_document(path: &Utf8Path) -> Result<HostDocument, DocumentError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            debug!(target: HOST_TARGET, %path, "host state document absent");
            return Ok(HostDocument::default());
        }
        Err(source) => {
            return Err(DocumentError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&contents).map_err(|source| DocumentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl EditorHost for DocumentHost {
    fn refresh(&mut self) -> Result<(), HostError> {
        self.reload().map_err(HostError::refresh)
    }

    fn list_windows(&self) -> Vec<WindowId> {
        self.document
            .windows
            .iter()
            .map(|window| WindowId(window.id))
            .collect()
    }

    fn active_window(&self) -> Option<WindowId> {
        self.document.active_window.map(WindowId)
    }

    fn active_view(&self, window: WindowId) -> Option<ViewId> {
        self.window(window)
            .and_then(|window| window.active_view)
            .map(ViewId)
    }

    fn open_files_of(&self, window: WindowId) -> Vec<OpenFile> {
        let Some(window) = self.window(window) else {
            return Vec::new();
        };
        window
            .views
            .iter()
            .filter_map(|view| {
                view.file_name
                    .as_ref()
                    .map(|path| OpenFile::new(ViewId(view.id), path.clone()))
            })
            .collect()
    }

    fn selection_of(&self, view: ViewId) -> Result<Vec<Region>, HostError> {
        self.view(view)
            .and_then(|found| found.selections.as_ref())
            .map(|regions| regions.iter().copied().map(Region::from).collect())
            .ok_or(HostError::UnresolvableView { view })
    }

    fn project_folders_of(&self, window: WindowId) -> Vec<Utf8PathBuf> {
        self.window(window)
            .map(|window| window.folders.clone())
            .unwrap_or_default()
    }
}
