//! Ownership of the editor host.
//!
//! Editor state may only be read from one designated thread. [`HostThread`]
//! owns the [`crate::snapshot::EditorHost`] for its whole life and serves
//! snapshot requests from any number of [`HostHandle`]s, one at a time.

mod document;
mod thread;

use std::time::Duration;

use editor_context_types::EditorState;

use crate::snapshot::HostError;

pub use self::document::{DocumentError, DocumentHost};
pub use self::thread::{HostHandle, HostThread};

pub(crate) const HOST_TARGET: &str = concat!(env!("CARGO_CRATE_NAME"), "::host");

/// Upper bound a request waits for the host thread to answer.
pub const SNAPSHOT_TIMEOUT: Duration = Duration::from_secs(5);

/// Anything that can produce an editor snapshot on demand.
///
/// Request handlers depend on this rather than on [`HostHandle`] so they can
/// be exercised without a host thread.
pub trait SnapshotSource: Send + Sync {
    /// Captures the editor state at the instant of the call.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] when the host cannot be reached or refreshed.
    fn snapshot(&self) -> Result<EditorState, HostError>;
}
