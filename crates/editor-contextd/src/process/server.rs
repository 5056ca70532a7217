//! The resource server as an owned resource.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::warn;

use editor_context_config::ServerEndpoint;

use crate::dispatch::DispatchConnectionHandler;
use crate::health::HealthReporter;
use crate::host::SnapshotSource;
use crate::transport::{ConnectionHandler, ListenerError, ListenerHandle, SocketListener};

use super::PROCESS_TARGET;

/// Observable lifecycle state of a [`ContextServer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Not accepting requests.
    Stopped,
    /// Accepting requests on `address`.
    Listening {
        /// Bound address.
        address: SocketAddr,
    },
}

/// Resource server bound to a loopback endpoint.
///
/// The server starts `Stopped`. Dropping it stops the listener.
pub struct ContextServer {
    endpoint: ServerEndpoint,
    handler: Arc<dyn ConnectionHandler>,
    reporter: Arc<dyn HealthReporter>,
    listener: Option<ListenerHandle>,
}

impl ContextServer {
    /// Creates a stopped server answering resource reads from `source`.
    #[must_use]
    pub fn new(
        endpoint: ServerEndpoint,
        source: Arc<dyn SnapshotSource>,
        reporter: Arc<dyn HealthReporter>,
    ) -> Self {
        Self {
            endpoint,
            handler: Arc::new(DispatchConnectionHandler::new(source)),
            reporter,
            listener: None,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ServerState {
        match &self.listener {
            Some(listener) => ServerState::Listening {
                address: listener.address(),
            },
            None => ServerState::Stopped,
        }
    }

    /// Binds the endpoint and starts accepting requests.
    ///
    /// Starting a listening server returns its current address. There is no
    /// retry: on failure the server stays `Stopped` and the error is reported
    /// once.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError::PortInUse`] when another process holds the
    /// port, or another [`ListenerError`] when binding fails.
    pub fn start(&mut self) -> Result<SocketAddr, ListenerError> {
        if let Some(listener) = &self.listener {
            return Ok(listener.address());
        }
        let started = SocketListener::bind(&self.endpoint)
            .and_then(|listener| listener.start(Arc::clone(&self.handler)));
        match started {
            Ok(listener) => {
                let address = listener.address();
                self.listener = Some(listener);
                self.reporter.server_listening(address);
                Ok(address)
            }
            Err(error) => {
                self.reporter.server_bind_failed(&error);
                Err(error)
            }
        }
    }

    /// Stops accepting requests and waits for the listener to exit.
    ///
    /// Stopping a stopped server does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError::ThreadPanic`] when the listener thread
    /// panicked.
    pub fn stop(&mut self) -> Result<(), ListenerError> {
        let Some(listener) = self.listener.take() else {
            return Ok(());
        };
        let address = listener.address();
        listener.shutdown();
        listener.join()?;
        self.reporter.server_stopped(address);
        Ok(())
    }
}

impl Drop for ContextServer {
    fn drop(&mut self) {
        if let Err(error) = self.stop() {
            warn!(target: PROCESS_TARGET, %error, "server did not stop cleanly");
        }
    }
}
