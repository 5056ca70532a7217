//! Termination handling for the daemon's main thread.

use std::io;
use std::sync::Mutex;

use signal_hook::consts::TERM_SIGNALS;
use signal_hook::consts::signal::SIGHUP;
use signal_hook::iterator::Signals;
use thiserror::Error;
use tracing::info;

use super::PROCESS_TARGET;

/// Something the launcher can park on until it is time to stop serving.
pub trait ShutdownSignal: Send + Sync {
    /// Returns once shutdown has been requested.
    ///
    /// # Errors
    ///
    /// Returns [`ShutdownError`] when the source of notifications is broken.
    fn wait(&self) -> Result<(), ShutdownError>;
}

/// Failures of the termination listener.
#[derive(Debug, Error)]
pub enum ShutdownError {
    /// The signal handlers could not be registered.
    #[error("could not register termination signal handlers: {source}")]
    Install {
        /// OS error.
        #[source]
        source: io::Error,
    },
    /// A previous waiter panicked while holding the signal iterator.
    #[error("termination signal listener is poisoned")]
    Poisoned,
}

/// Listens for SIGTERM, SIGINT, SIGQUIT and SIGHUP.
///
/// Handlers are registered by [`SignalShutdown::install`], so a signal that
/// arrives while the server is still starting is not lost.
pub struct SignalShutdown {
    signals: Mutex<Signals>,
}

impl SignalShutdown {
    /// Registers the termination handlers.
    ///
    /// # Errors
    ///
    /// Returns [`ShutdownError::Install`] when registration fails.
    pub fn install() -> Result<Self, ShutdownError> {
        let mut wanted = TERM_SIGNALS.to_vec();
        wanted.push(SIGHUP);
        let signals = Signals::new(wanted).map_err(|source| ShutdownError::Install { source })?;
        Ok(Self {
            signals: Mutex::new(signals),
        })
    }
}

impl ShutdownSignal for SignalShutdown {
    fn wait(&self) -> Result<(), ShutdownError> {
        let mut signals = self.signals.lock().map_err(|_| ShutdownError::Poisoned)?;
        let received = signals.forever().next();
        info!(target: PROCESS_TARGET, signal = ?received, "termination requested");
        Ok(())
    }
}
