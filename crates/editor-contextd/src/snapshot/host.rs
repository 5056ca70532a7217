//! Capability interface over the editor's window and view graph.

use std::error::Error as StdError;
use std::fmt;

use camino::Utf8PathBuf;
use editor_context_types::{Position, Selection};
use thiserror::Error;

/// Opaque identifier of an editor window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u64);

/// Opaque identifier of a view (an editor tab).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "window:{}", self.0)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "view:{}", self.0)
    }
}

/// Host-internal text coordinate. Both components are 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HostPoint {
    /// Row, counted from zero.
    pub row: u32,
    /// Column, counted from zero.
    pub column: u32,
}

impl HostPoint {
    /// Creates a host coordinate.
    #[must_use]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Converts to the user-facing representation (1-indexed line).
    #[must_use]
    pub const fn to_position(self) -> Position {
        Position::from_host(self.row, self.column)
    }
}

/// One selection region: where the selection started and where the caret is.
///
/// The anchor may come after the caret when the user selected backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Fixed end of the selection.
    pub anchor: HostPoint,
    /// Moving end of the selection, where the caret is drawn.
    pub caret: HostPoint,
}

impl Region {
    /// Creates a region from its two ends.
    #[must_use]
    pub const fn new(anchor: HostPoint, caret: HostPoint) -> Self {
        Self { anchor, caret }
    }

    /// A collapsed region: a bare caret.
    #[must_use]
    pub const fn caret_at(row: u32, column: u32) -> Self {
        let point = HostPoint::new(row, column);
        Self {
            anchor: point,
            caret: point,
        }
    }

    /// Returns `true` when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchor == self.caret
    }

    /// Maps the region onto the selection model.
    ///
    /// Empty regions become a cursor at the caret; anything else becomes a
    /// range in document order.
    #[must_use]
    pub fn to_selection(&self) -> Selection {
        if self.is_empty() {
            Selection::cursor(self.caret.to_position())
        } else {
            Selection::range(self.anchor.to_position(), self.caret.to_position())
        }
    }
}

/// A file-backed view inside a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenFile {
    /// View showing the file.
    pub view: ViewId,
    /// Absolute path of the file.
    pub path: Utf8PathBuf,
}

impl OpenFile {
    /// Pairs a view with its file path.
    #[must_use]
    pub fn new(view: ViewId, path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            view,
            path: path.into(),
        }
    }
}

/// Errors raised while reading host state.
#[derive(Debug, Error)]
pub enum HostError {
    /// The view has no live caret to read a position from.
    #[error("{view} has no resolvable selection")]
    UnresolvableView {
        /// View that could not be resolved.
        view: ViewId,
    },
    /// The host could not re-synchronise with the editor.
    #[error("failed to refresh editor state: {source}")]
    Refresh {
        /// Underlying adapter error.
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
    /// The host thread has exited.
    #[error("editor host thread is not running")]
    Stopped,
    /// The host thread did not answer in time.
    #[error("editor host did not answer within {timeout_ms} ms")]
    Timeout {
        /// Budget that elapsed, in milliseconds.
        timeout_ms: u128,
    },
    /// The host thread could not be started.
    #[error("failed to spawn editor host thread: {source}")]
    Spawn {
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },
    /// The host thread panicked.
    #[error("editor host thread panicked")]
    ThreadPanic,
}

impl HostError {
    /// Wraps an adapter error as a refresh failure.
    pub fn refresh(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::Refresh {
            source: source.into(),
        }
    }
}

/// Read-only access to the editor's windows and views.
///
/// Implementations are only ever called from the thread that owns them; see
/// [`crate::host::HostThread`].
#[cfg_attr(test, mockall::automock)]
pub trait EditorHost {
    /// Re-synchronises with live editor state before a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Refresh`] when the editor state cannot be read.
    fn refresh(&mut self) -> Result<(), HostError> {
        Ok(())
    }

    /// Every open window, in host order.
    fn list_windows(&self) -> Vec<WindowId>;

    /// The window that currently has focus.
    fn active_window(&self) -> Option<WindowId>;

    /// The focused view of a window.
    fn active_view(&self, window: WindowId) -> Option<ViewId>;

    /// File-backed views of a window, in tab order.
    fn open_files_of(&self, window: WindowId) -> Vec<OpenFile>;

    /// Selection regions of a view, primary region first.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::UnresolvableView`] when the view has no caret.
    fn selection_of(&self, view: ViewId) -> Result<Vec<Region>, HostError>;

    /// Project root folders of a window.
    fn project_folders_of(&self, window: WindowId) -> Vec<Utf8PathBuf>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_region_maps_to_cursor() {
        let selection = Region::caret_at(0, 0).to_selection();
        assert_eq!(selection, Selection::cursor(Position::new(1, 0)));
    }

    #[test]
    fn backwards_region_maps_to_ordered_range() {
        let region = Region::new(HostPoint::new(4, 10), HostPoint::new(2, 0));
        assert_eq!(
            region.to_selection(),
            Selection::Range {
                start: Position::new(3, 0),
                end: Position::new(5, 10),
            }
        );
    }
}
