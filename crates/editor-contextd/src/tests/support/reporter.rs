//! In-memory [`HealthReporter`] for asserting on lifecycle milestones.

use std::net::SocketAddr;
use std::sync::Mutex;

use editor_context_config::Config;

use crate::bootstrap::BootstrapError;
use crate::health::HealthReporter;
use crate::transport::ListenerError;

/// One recorded milestone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HealthEvent {
    /// Bootstrap started.
    BootstrapStarting,
    /// Bootstrap finished.
    BootstrapSucceeded,
    /// Bootstrap stopped; carries the rendered error.
    BootstrapFailed(String),
    /// The server accepted its endpoint.
    ServerListening(SocketAddr),
    /// The server could not bind.
    ServerBindFailed(String),
    /// The server stopped listening.
    ServerStopped(SocketAddr),
}

/// Appends every milestone to a list.
#[derive(Debug, Default)]
pub struct RecordingHealthReporter {
    events: Mutex<Vec<HealthEvent>>,
}

impl RecordingHealthReporter {
    /// Milestones seen so far, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<HealthEvent> {
        self.events
            .lock()
            .expect("recorded events lock")
            .clone()
    }

    pub fn record(&self, event: HealthEvent) {
        self.events
            .lock()
            .expect("recorded events lock")
            .push(event);
    }

    /// Number of bind failures reported so far.
    pub fn bind_failures(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, HealthEvent::ServerBindFailed(_)))
            .count()
    }
}

impl HealthReporter for RecordingHealthReporter {
    fn bootstrap_starting(&self) {
        self.record(HealthEvent::BootstrapStarting);
    }

    fn bootstrap_succeeded(&self, _config: &Config) {
        self.record(HealthEvent::BootstrapSucceeded);
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        self.record(HealthEvent::BootstrapFailed(error.to_string()));
    }

    fn server_listening(&self, address: SocketAddr) {
        self.record(HealthEvent::ServerListening(address));
    }

    fn server_bind_failed(&self, error: &ListenerError) {
        self.record(HealthEvent::ServerBindFailed(error.to_string()));
    }

    fn server_stopped(&self, address: SocketAddr) {
        self.record(HealthEvent::ServerStopped(address));
    }
}
