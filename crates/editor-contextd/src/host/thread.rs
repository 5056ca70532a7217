//! Dedicated thread that owns the editor host.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, SyncSender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use editor_context_types::EditorState;
use tracing::{debug, info, warn};

use crate::snapshot::{self, EditorHost, HostError};

use super::{HOST_TARGET, SNAPSHOT_TIMEOUT, SnapshotSource};

const THREAD_NAME: &str = "editor-host";

enum HostMessage {
    Snapshot {
        reply: SyncSender<Result<EditorState, HostError>>,
    },
    Shutdown,
}

/// Owner of the host thread.
///
/// Dropping the owner stops the thread and waits for it to exit.
#[derive(Debug)]
pub struct HostThread {
    sender: Sender<HostMessage>,
    handle: Option<JoinHandle<()>>,
}

impl HostThread {
    /// Starts the host thread, constructing the host on it with `factory`.
    ///
    /// The host itself never crosses threads, so it does not need to be
    /// `Send`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Spawn`] when the operating system refuses to
    /// start the thread.
    pub fn spawn<F, H>(factory: F) -> Result<Self, HostError>
    where
        F: FnOnce() -> H + Send + 'static,
        H: EditorHost + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let handle = thread::Builder::new()
            .name(THREAD_NAME.to_owned())
            .spawn(move || run_host_loop(factory(), &receiver))
            .map_err(|source| HostError::Spawn { source })?;
        Ok(Self {
            sender,
            handle: Some(handle),
        })
    }

    /// Returns a handle that can request snapshots from any thread.
    #[must_use]
    pub fn handle(&self) -> HostHandle {
        HostHandle {
            sender: self.sender.clone(),
            timeout: SNAPSHOT_TIMEOUT,
        }
    }

    /// Stops the thread and waits for it to exit.
    ///
    /// Requests already queued are answered first; later requests fail with
    /// [`HostError::Stopped`].
    ///
    /// # Errors
    ///
    /// Returns [`HostError::ThreadPanic`] when the host thread panicked.
    pub fn shutdown(mut self) -> Result<(), HostError> {
        self.stop()
    }

    fn stop(&mut self) -> Result<(), HostError> {
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };
        // The thread may already be gone; joining still reports a panic.
        let _ = self.sender.send(HostMessage::Shutdown);
        handle.join().map_err(|_| HostError::ThreadPanic)
    }
}

impl Drop for HostThread {
    fn drop(&mut self) {
        if let Err(error) = self.stop() {
            warn!(target: HOST_TARGET, %error, "editor host thread did not stop cleanly");
        }
    }
}

/// Cloneable requester of snapshots from the host thread.
#[derive(Debug, Clone)]
pub struct HostHandle {
    sender: Sender<HostMessage>,
    timeout: Duration,
}

impl HostHandle {
    /// Overrides how long a request waits for the host thread.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl SnapshotSource for HostHandle {
    fn snapshot(&self) -> Result<EditorState, HostError> {
        let (reply, response) = mpsc::sync_channel(1);
        self.sender
            .send(HostMessage::Snapshot { reply })
            .map_err(|_| HostError::Stopped)?;
        match response.recv_timeout(self.timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(HostError::Timeout {
                timeout_ms: self.timeout.as_millis(),
            }),
            Err(RecvTimeoutError::Disconnected) => Err(HostError::Stopped),
        }
    }
}

fn run_host_loop<H: EditorHost>(mut host: H, receiver: &Receiver<HostMessage>) {
    info!(target: HOST_TARGET, "editor host thread started");
    for message in receiver {
        match message {
            HostMessage::Snapshot { reply } => {
                let result = host.refresh().map(|()| snapshot::build(&host));
                if reply.send(result).is_err() {
                    debug!(target: HOST_TARGET, "snapshot requester gave up before the reply");
                }
            }
            HostMessage::Shutdown => break,
        }
    }
    info!(target: HOST_TARGET, "editor host thread stopped");
}
