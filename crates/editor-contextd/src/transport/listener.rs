//! Listener implementation for the HTTP endpoint.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::thread;
use std::time::Duration;

use tiny_http::{Request, Server};
use tracing::{debug, info, warn};

use editor_context_config::ServerEndpoint;

use super::handler::read_body;
use super::{ConnectionHandler, HttpMethod, HttpRequest, LISTENER_TARGET, ListenerError};

const ACCEPT_BACKOFF: Duration = Duration::from_millis(25);
const ERROR_BACKOFF: Duration = Duration::from_millis(150);

/// Listener bound to a TCP address but not yet accepting.
pub(crate) struct SocketListener {
    server: Server,
    address: SocketAddr,
}

impl SocketListener {
    pub(crate) fn bind(endpoint: &ServerEndpoint) -> Result<Self, ListenerError> {
        let requested = resolve(endpoint.host(), endpoint.port())?;
        let server = Server::http(requested).map_err(|source| {
            let in_use = source
                .downcast_ref::<io::Error>()
                .is_some_and(|error| error.kind() == io::ErrorKind::AddrInUse);
            if in_use {
                ListenerError::PortInUse { address: requested }
            } else {
                ListenerError::Bind {
                    address: requested,
                    source,
                }
            }
        })?;
        let address = server
            .server_addr()
            .to_ip()
            .ok_or(ListenerError::UnknownAddress)?;
        Ok(Self { server, address })
    }

    /// Address actually bound; differs from the endpoint when port 0 was
    /// requested.
    #[cfg(test)]
    pub(crate) fn local_addr(&self) -> SocketAddr {
        self.address
    }

    pub(crate) fn start(
        self,
        handler: Arc<dyn ConnectionHandler>,
    ) -> Result<ListenerHandle, ListenerError> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_flag = Arc::clone(&shutdown);
        let address = self.address;
        let handle = thread::Builder::new()
            .name("http-listener".to_owned())
            .spawn(move || run_accept_loop(&self, &shutdown_flag, &handler))
            .map_err(|source| ListenerError::Spawn { source })?;
        Ok(ListenerHandle {
            address,
            shutdown,
            handle: Some(handle),
        })
    }
}

/// Handle to the background listener thread.
pub(crate) struct ListenerHandle {
    address: SocketAddr,
    shutdown: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ListenerHandle {
    pub(crate) fn address(&self) -> SocketAddr {
        self.address
    }

    pub(crate) fn shutdown(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }

    pub(crate) fn join(mut self) -> Result<(), ListenerError> {
        if let Some(handle) = self.handle.take() {
            match handle.join() {
                Ok(()) => Ok(()),
                Err(_) => Err(ListenerError::ThreadPanic),
            }
        } else {
            Ok(())
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }
}

fn run_accept_loop(
    listener: &SocketListener,
    shutdown: &AtomicBool,
    handler: &Arc<dyn ConnectionHandler>,
) {
    info!(
        target: LISTENER_TARGET,
        address = %listener.address,
        "http listener active"
    );
    let mut last_error = None::<io::ErrorKind>;
    while !shutdown.load(Ordering::SeqCst) {
        match listener.server.recv_timeout(ACCEPT_BACKOFF) {
            Ok(Some(request)) => {
                last_error = None;
                let handler = Arc::clone(handler);
                thread::spawn(move || serve(request, handler.as_ref()));
            }
            Ok(None) => {}
            Err(error) => {
                let kind = error.kind();
                if last_error != Some(kind) {
                    warn!(
                        target: LISTENER_TARGET,
                        error = %error,
                        "http accept error"
                    );
                }
                last_error = Some(kind);
                thread::sleep(ERROR_BACKOFF);
            }
        }
    }
    info!(
        target: LISTENER_TARGET,
        address = %listener.address,
        "http listener stopped"
    );
}

fn serve(mut request: Request, handler: &dyn ConnectionHandler) {
    let method = HttpMethod::from(request.method());
    let url = request.url().to_owned();
    let declared_length = request.body_length();
    let body = match read_body(request.as_reader(), declared_length) {
        Ok(body) => body,
        Err(error) => {
            warn!(
                target: LISTENER_TARGET,
                error = %error,
                "failed to read request body"
            );
            return;
        }
    };

    let reply = handler.respond(HttpRequest::new(method, &url, body));
    debug!(
        target: LISTENER_TARGET,
        path = %url,
        status = reply.status,
        "request served"
    );
    if let Err(error) = request.respond(reply.into_response()) {
        warn!(
            target: LISTENER_TARGET,
            error = %error,
            "failed to write response"
        );
    }
}

fn resolve(host: &str, port: u16) -> Result<SocketAddr, ListenerError> {
    let mut addrs = (host, port)
        .to_socket_addrs()
        .map_err(|source| ListenerError::Resolve {
            host: host.to_owned(),
            port,
            source,
        })?;
    addrs
        .find(|addr| matches!(addr, SocketAddr::V4(_) | SocketAddr::V6(_)))
        .ok_or_else(|| ListenerError::ResolveEmpty {
            host: host.to_owned(),
            port,
        })
}
