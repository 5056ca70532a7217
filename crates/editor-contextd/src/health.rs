//! Structured health reporting for server lifecycle events.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::bootstrap::BootstrapError;
use crate::transport::ListenerError;

use editor_context_config::Config;

const HEALTH_TARGET: &str = concat!(env!("CARGO_CRATE_NAME"), "::health");

/// Receives the daemon's lifecycle milestones.
pub trait HealthReporter: Send + Sync {
    /// Startup began; nothing has been loaded yet.
    fn bootstrap_starting(&self);

    /// Configuration is valid and telemetry is live.
    fn bootstrap_succeeded(&self, config: &Config);

    /// Startup stopped at `error`.
    fn bootstrap_failed(&self, error: &BootstrapError);

    /// Invoked once the server accepts requests.
    fn server_listening(&self, address: SocketAddr);

    /// Invoked when the server cannot bind its endpoint.
    fn server_bind_failed(&self, error: &ListenerError);

    /// Invoked after the server stopped listening.
    fn server_stopped(&self, address: SocketAddr);
}

impl<T> HealthReporter for Arc<T>
where
    T: HealthReporter + ?Sized,
{
    fn bootstrap_starting(&self) {
        (**self).bootstrap_starting();
    }

    fn bootstrap_succeeded(&self, config: &Config) {
        (**self).bootstrap_succeeded(config);
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        (**self).bootstrap_failed(error);
    }

    fn server_listening(&self, address: SocketAddr) {
        (**self).server_listening(address);
    }

    fn server_bind_failed(&self, error: &ListenerError) {
        (**self).server_bind_failed(error);
    }

    fn server_stopped(&self, address: SocketAddr) {
        (**self).server_stopped(address);
    }
}

/// Emits each milestone as a `tracing` event under the health target.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuredHealthReporter;

impl StructuredHealthReporter {
    /// Creates the reporter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl HealthReporter for StructuredHealthReporter {
    fn bootstrap_starting(&self) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "bootstrap_starting",
            "starting server bootstrap"
        );
    }

    fn bootstrap_succeeded(&self, config: &Config) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "bootstrap_succeeded",
            endpoint = %config.server_endpoint(),
            host_state = ?config.host_state_path(),
            log_filter = %config.log_filter(),
            log_format = ?config.log_format(),
            "server bootstrap completed"
        );
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        tracing::error!(
            target: HEALTH_TARGET,
            event = "bootstrap_failed",
            error = %error,
            "server bootstrap failed"
        );
    }

    fn server_listening(&self, address: SocketAddr) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "server_listening",
            %address,
            "editor context server listening"
        );
    }

    fn server_bind_failed(&self, error: &ListenerError) {
        tracing::error!(
            target: HEALTH_TARGET,
            event = "server_bind_failed",
            error = %error,
            "editor context server failed to start"
        );
    }

    fn server_stopped(&self, address: SocketAddr) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "server_stopped",
            %address,
            "editor context server stopped"
        );
    }
}
