//! Snapshot construction over a read-only view of the editor.
//!
//! The live window/view graph belongs to the editor. This module only sees it
//! through the [`EditorHost`] capability trait, so the aggregation logic in
//! [`build`] can run against the on-disk document host used by the daemon as
//! well as the in-memory fake used by the tests.

mod builder;
#[cfg(any(test, feature = "test-support"))]
mod fake;
mod host;

pub use builder::{build, build_at, render_state, snapshot_timestamp};
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeHost;
#[cfg(test)]
pub use host::MockEditorHost;
pub use host::{EditorHost, HostError, HostPoint, OpenFile, Region, ViewId, WindowId};

/// Tracing target for snapshot construction.
pub(crate) const SNAPSHOT_TARGET: &str = concat!(env!("CARGO_CRATE_NAME"), "::snapshot");
