//! Defines the unified error surface for server launch and supervision.

use thiserror::Error;

use crate::bootstrap::BootstrapError;
use crate::snapshot::HostError;
use crate::transport::ListenerError;

use super::shutdown::ShutdownError;

/// Errors surfaced while launching or supervising the server process.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Bootstrapping the server failed.
    #[error("server bootstrap failed: {source}")]
    Bootstrap {
        /// Underlying bootstrap error.
        #[source]
        source: BootstrapError,
    },
    /// The editor host thread failed.
    #[error("editor host failed: {source}")]
    Host {
        /// Underlying host error.
        #[source]
        source: HostError,
    },
    /// The resource server could not start listening.
    #[error("resource server failed to start: {source}")]
    Start {
        /// Underlying listener error.
        #[source]
        source: ListenerError,
    },
    /// The HTTP listener failed while stopping.
    #[error("resource server listener failed: {source}")]
    Listener {
        /// Underlying listener error.
        #[source]
        source: ListenerError,
    },
    /// Waiting for shutdown failed.
    #[error("failed to await shutdown signal: {source}")]
    Shutdown {
        /// Underlying shutdown error.
        #[source]
        source: ShutdownError,
    },
}

impl LaunchError {
    /// Whether the health reporter already logged this failure.
    ///
    /// Start failures are reported as they happen; bootstrap failures occur
    /// before telemetry is installed and are not.
    #[must_use]
    pub const fn is_reported(&self) -> bool {
        matches!(self, Self::Start { .. })
    }
}

impl From<BootstrapError> for LaunchError {
    fn from(source: BootstrapError) -> Self {
        Self::Bootstrap { source }
    }
}

impl From<HostError> for LaunchError {
    fn from(source: HostError) -> Self {
        Self::Host { source }
    }
}

impl From<ListenerError> for LaunchError {
    fn from(source: ListenerError) -> Self {
        Self::Listener { source }
    }
}

impl From<ShutdownError> for LaunchError {
    fn from(source: ShutdownError) -> Self {
        Self::Shutdown { source }
    }
}
