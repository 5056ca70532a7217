//! Error types for listener operations.

use std::error::Error as StdError;
use std::io;
use std::net::SocketAddr;

use thiserror::Error;

/// Errors surfaced while binding or running the HTTP listener.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The configured host could not be resolved.
    #[error("failed to resolve TCP address {host}:{port}: {source}")]
    Resolve {
        /// Configured host.
        host: String,
        /// Configured port.
        port: u16,
        /// Underlying resolver error.
        #[source]
        source: io::Error,
    },
    /// Resolution succeeded but produced no addresses.
    #[error("no TCP addresses resolved for {host}:{port}")]
    ResolveEmpty {
        /// Configured host.
        host: String,
        /// Configured port.
        port: u16,
    },
    /// Another process already listens on the address.
    #[error("address {address} is already in use")]
    PortInUse {
        /// Address that could not be bound.
        address: SocketAddr,
    },
    /// Binding failed for any other reason.
    #[error("failed to bind HTTP listener at {address}: {source}")]
    Bind {
        /// Address that could not be bound.
        address: SocketAddr,
        /// Underlying server error.
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
    /// The bound server could not report its address.
    #[error("HTTP listener did not report a TCP address")]
    UnknownAddress,
    /// The accept thread could not be started.
    #[error("failed to spawn listener thread: {source}")]
    Spawn {
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },
    /// The accept thread panicked.
    #[error("listener thread panicked")]
    ThreadPanic,
}
