//! Snapshot source that always answers with the same state.

use editor_context_types::EditorState;

use crate::host::SnapshotSource;
use crate::snapshot::HostError;

/// Serves a fixed [`EditorState`] without a host thread.
#[derive(Debug, Clone)]
pub struct FixedSnapshot {
    state: EditorState,
}

impl FixedSnapshot {
    pub fn new(state: EditorState) -> Self {
        Self { state }
    }

    pub fn empty() -> Self {
        Self::new(EditorState::empty("2026-10-19T00:00:00Z"))
    }
}

impl SnapshotSource for FixedSnapshot {
    fn snapshot(&self) -> Result<EditorState, HostError> {
        Ok(self.state.clone())
    }
}
