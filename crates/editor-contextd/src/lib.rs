//! Editor context daemon.
//!
//! The daemon exposes a read-only snapshot of the editor (open files, their
//! selections and the project folders) as a single MCP resource,
//! `sublime-context://state`, over JSON-RPC 2.0 on a loopback HTTP endpoint.
//!
//! The pieces fit together as follows:
//!
//! - [`snapshot`] turns the window/view graph exposed by an
//!   [`snapshot::EditorHost`] into an [`editor_context_types::EditorState`].
//! - [`host`] confines the editor host to a single thread and lets request
//!   handlers ask it for snapshots through a [`SnapshotSource`].
//! - [`ContextServer`] binds the endpoint, dispatches JSON-RPC requests and
//!   reports its lifecycle through a [`HealthReporter`].
//!
//! [`run_server`] wires these together for the `editor-contextd` binary and
//! [`run_report`] prints one snapshot for the `editor-context-show` binary.

mod bootstrap;
mod dispatch;
mod health;
pub mod host;
mod process;
mod report;
pub mod snapshot;
mod telemetry;
mod transport;

pub use bootstrap::{
    BootstrapError, ConfigLoader, FixedConfigLoader, LayeredConfigLoader, Runtime, bootstrap_with,
};
pub use dispatch::DispatchError;
pub use health::{HealthReporter, StructuredHealthReporter};
pub use host::{
    DocumentError, DocumentHost, HostHandle, HostThread, SNAPSHOT_TIMEOUT, SnapshotSource,
};
pub use process::{ContextServer, LaunchError, ServerState, ShutdownError, run_server};
pub use report::{ReportError, run_report, write_state_report};
pub use telemetry::{TelemetryError, TelemetryHandle};
pub use transport::ListenerError;

#[cfg(test)]
mod tests;
