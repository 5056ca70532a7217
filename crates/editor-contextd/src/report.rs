//! One-shot state report for debugging host integrations.
//!
//! Prints the snapshot the server would serve, without starting the server.

use std::io::{self, Write};
use std::sync::Arc;

use ortho_config::OrthoError;
use thiserror::Error;

use crate::bootstrap::ConfigLoader;
use crate::host::DocumentHost;
use crate::snapshot::{self, EditorHost, HostError};

/// Errors raised while producing a state report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Configuration failed to load.
    #[error("failed to load configuration: {source}")]
    Configuration {
        /// Underlying loader error.
        #[source]
        source: Arc<OrthoError>,
    },
    /// The host could not be read.
    #[error("failed to read editor state: {0}")]
    Host(#[from] HostError),
    /// The snapshot could not be serialised.
    #[error("failed to serialise editor state: {0}")]
    Render(#[from] serde_json::Error),
    /// The report could not be written.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Refreshes `host`, builds one snapshot and writes it as indented JSON
/// followed by a newline.
///
/// # Errors
///
/// Returns [`ReportError`] when the host cannot be refreshed or the output
/// cannot be written.
pub fn write_state_report<H, W>(host: &mut H, out: &mut W) -> Result<(), ReportError>
where
    H: EditorHost + ?Sized,
    W: Write + ?Sized,
{
    host.refresh()?;
    let state = snapshot::build(host);
    let text = snapshot::render_state(&state)?;
    writeln!(out, "{text}")?;
    out.flush()?;
    Ok(())
}

/// Loads configuration and prints the snapshot of the configured host-state
/// document to stdout.
///
/// # Errors
///
/// Returns [`ReportError`] when configuration, the document or stdout fail.
pub fn run_report(loader: &dyn ConfigLoader) -> Result<(), ReportError> {
    let config = loader
        .load()
        .map_err(|source| ReportError::Configuration { source })?;
    let mut host = DocumentHost::new(config.host_state_path);
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_state_report(&mut host, &mut lock)
}
